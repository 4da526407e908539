use crate::{common::reply::Reply, domain::ledger::FeeLedger};

pub fn handle(ledger: &FeeLedger, student_id: String) -> Reply {
    match ledger.find_account(&student_id) {
        Some(account) => Reply::History {
            student_id,
            payments: account.payment_history().to_vec(),
        },
        None => Reply::StudentNotFound { student_id },
    }
}
