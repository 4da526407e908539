use crate::{common::reply::Reply, domain::ledger::FeeLedger};

pub fn handle(ledger: &FeeLedger, student_id: String) -> Reply {
    match ledger.find_account(&student_id) {
        Some(account) => Reply::Report(account.clone()),
        None => Reply::StudentNotFound { student_id },
    }
}
