use crate::common::money::Money;

#[derive(Debug, Clone)]
pub struct StudentAccount {
    /// Externally assigned identifier; immutable after registration.
    pub student_id: String,
    /// Display name; immutable after registration.
    pub name: String,
    /// Total amount owed, fixed at creation.
    pub total_fees: Money,
    /// Running total of payments applied. Always equals the sum of `payments`.
    pub paid_fees: Money,
    /// Individual payment amounts in the order they were received. Append-only.
    pub payments: Vec<Money>,
}

impl StudentAccount {
    pub fn new(student_id: String, name: String, total_fees: Money) -> Self {
        Self {
            student_id,
            name,
            total_fees,
            paid_fees: Money::zero(),
            payments: Vec::new(),
        }
    }

    /// Applies one payment: appends to the history and bumps the running total
    /// in the same step, so the two never drift apart.
    pub fn record_payment(&mut self, amount: Money) {
        self.paid_fees += amount;
        self.payments.push(amount);
    }

    /// May be negative after an overpayment.
    pub fn remaining_fees(&self) -> Money {
        self.total_fees - self.paid_fees
    }

    pub fn payment_history(&self) -> &[Money] {
        &self.payments
    }
}
