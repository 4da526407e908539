use crate::common::{error::LookupError, money::Money};
use crate::domain::account::StudentAccount;

/// In-memory roster of student fee accounts, kept in registration order.
///
/// Lookups are a linear scan; at the expected scale (a handful to low
/// thousands of accounts) no index is warranted.
#[derive(Debug, Default)]
pub struct FeeLedger {
    pub accounts: Vec<StudentAccount>,
}

impl FeeLedger {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// Read-only view of every account, in registration order.
    pub fn accounts(&self) -> &[StudentAccount] {
        &self.accounts
    }

    /// Appends a new account with zero paid fees and an empty payment history.
    ///
    /// Duplicate ids are not rejected; lookups always match the earliest
    /// registration.
    pub fn register(&mut self, student_id: String, name: String, total_fees: Money) {
        self.accounts
            .push(StudentAccount::new(student_id, name, total_fees));
    }

    /// First account whose id matches, in registration order.
    pub fn find_account(&self, student_id: &str) -> Option<&StudentAccount> {
        self.accounts.iter().find(|a| a.student_id == student_id)
    }

    /// Applies a payment to the first matching account. Leaves the ledger
    /// untouched and reports `StudentNotFound` when no account matches.
    pub fn record_payment(&mut self, student_id: &str, amount: Money) -> Result<(), LookupError> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.student_id == student_id)
            .ok_or_else(|| LookupError::StudentNotFound(student_id.to_string()))?;
        account.record_payment(amount);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(entries: &[(&str, &str, i64)]) -> FeeLedger {
        let mut ledger = FeeLedger::new();
        for (id, name, total) in entries {
            ledger.register(id.to_string(), name.to_string(), Money::new(*total));
        }
        ledger
    }

    #[test]
    fn register_then_find_returns_the_account() {
        let ledger = ledger_with(&[("S1", "Alice", 100_000)]);

        let acc = ledger.find_account("S1").expect("account exists");
        assert_eq!(acc.student_id, "S1");
        assert_eq!(acc.name, "Alice");
        assert_eq!(acc.total_fees, Money::new(100_000));
        assert_eq!(acc.paid_fees, Money::zero());
        assert!(acc.payment_history().is_empty());
    }

    #[test]
    fn find_unknown_id_returns_none() {
        let ledger = ledger_with(&[("S1", "Alice", 100_000)]);
        assert!(ledger.find_account("S2").is_none());
    }

    #[test]
    fn record_payment_applies_to_matching_account() {
        let mut ledger = ledger_with(&[("S1", "Alice", 100_000)]);

        ledger.record_payment("S1", Money::new(20_000)).unwrap();

        let acc = ledger.find_account("S1").unwrap();
        assert_eq!(acc.paid_fees, Money::new(20_000));
        assert_eq!(acc.remaining_fees(), Money::new(80_000));
        assert_eq!(acc.payment_history(), &[Money::new(20_000)]);
    }

    #[test]
    fn record_payment_for_unknown_id_fails_and_leaves_ledger_unchanged() {
        let mut ledger = ledger_with(&[("S1", "Alice", 100_000)]);

        let err = ledger.record_payment("S9", Money::new(20_000)).unwrap_err();
        assert_eq!(err, LookupError::StudentNotFound("S9".to_string()));

        let acc = ledger.find_account("S1").unwrap();
        assert_eq!(acc.paid_fees, Money::zero());
        assert!(acc.payment_history().is_empty());
        assert_eq!(ledger.accounts().len(), 1);
    }

    #[test]
    fn duplicate_ids_resolve_to_the_first_registration() {
        let mut ledger = ledger_with(&[("S1", "Alice", 100_000), ("S1", "Alicia", 200_000)]);

        let acc = ledger.find_account("S1").unwrap();
        assert_eq!(acc.name, "Alice");

        // payments also land on the first occurrence
        ledger.record_payment("S1", Money::new(5_000)).unwrap();
        assert_eq!(ledger.accounts()[0].paid_fees, Money::new(5_000));
        assert_eq!(ledger.accounts()[1].paid_fees, Money::zero());
    }

    #[test]
    fn accounts_keeps_registration_order_across_lookups() {
        let mut ledger = ledger_with(&[("S1", "Alice", 100_000), ("S2", "Bob", 150_000)]);

        // interleaved lookups must not disturb enumeration order
        let _ = ledger.find_account("S2");
        ledger.record_payment("S2", Money::new(1_000)).unwrap();
        let _ = ledger.find_account("S1");

        let ids: Vec<&str> = ledger
            .accounts()
            .iter()
            .map(|a| a.student_id.as_str())
            .collect();
        assert_eq!(ids, ["S1", "S2"]);
    }
}
