use tracing::warn;

use crate::{
    common::{money::Money, reply::Reply},
    domain::ledger::FeeLedger,
};

pub fn handle(ledger: &mut FeeLedger, student_id: String, name: String, total_fees: Money) -> Reply {
    // duplicate ids are not rejected; the earliest registration wins lookups
    if ledger.find_account(&student_id).is_some() {
        warn!(student_id = %student_id, "registering duplicate student id");
    }

    ledger.register(student_id.clone(), name, total_fees);
    Reply::Registered { student_id }
}
