use crate::{common::reply::Reply, domain::ledger::FeeLedger};

pub fn handle(ledger: &FeeLedger) -> Reply {
    Reply::Roster(ledger.accounts().to_vec())
}
