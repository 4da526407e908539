use crate::common::money::Money;
use crate::domain::account::StudentAccount;

/// Outcome of one dispatched command, handed back to the caller for rendering.
///
/// Handlers never write output themselves; they describe what happened and the
/// presentation side (`io::writer`) turns that into text.
#[derive(Debug)]
pub enum Reply {
    Registered { student_id: String },
    PaymentRecorded { student_id: String },
    StudentNotFound { student_id: String },
    Report(StudentAccount),
    Roster(Vec<StudentAccount>),
    History {
        student_id: String,
        payments: Vec<Money>,
    },
}
