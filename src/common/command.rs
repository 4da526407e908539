use crate::common::money::Money;

/// Represents one user action that is sent from the reader to the worker for dispatch.
#[derive(Debug)]
pub enum LedgerCommand {
    Register {
        student_id: String,
        name: String,
        total_fees: Money,
    },
    RecordPayment {
        student_id: String,
        amount: Money,
    },
    GetReport {
        student_id: String,
    },
    ListAll,
    GetHistory {
        student_id: String,
    },
}
