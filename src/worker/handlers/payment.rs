use tracing::{debug, warn};

use crate::{
    common::{error::LookupError, money::Money, reply::Reply},
    domain::ledger::FeeLedger,
};

pub fn handle(ledger: &mut FeeLedger, student_id: String, amount: Money) -> Reply {
    // zero and negative amounts are not rejected; the ledger applies them as-is
    if amount <= Money::zero() {
        debug!(student_id = %student_id, %amount, "non-positive payment amount");
    }

    match ledger.record_payment(&student_id, amount) {
        Ok(()) => Reply::PaymentRecorded { student_id },
        Err(LookupError::StudentNotFound(_)) => {
            warn!(student_id = %student_id, "payment for unknown student");
            Reply::StudentNotFound { student_id }
        }
    }
}
