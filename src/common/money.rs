use bigdecimal::BigDecimal;
use bigdecimal::*;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
const SCALE: i64 = 100;

#[derive(Debug, Clone, Copy, Default)]
/// A struct representing a fee amount in the smallest currency unit (cents).
///
/// # Why Use Money? It is a Value Object.
/// Using `Money` as a wrapper around `i64` provides type safety and prevents confusion
/// with other numeric values. Fee totals, running paid amounts, and individual payments
/// all share one representation. By storing money as an integer (in cents), we avoid
/// floating-point precision issues that can occur with monetary calculations.
///
/// Negative values are representable on purpose: remaining fees go below zero when a
/// student overpays, and negative payment amounts are not rejected by the ledger.
///
/// # Examples
/// ```
/// use fee_ledger::common::money::Money;
///
/// let amount = Money::new(250); // Represents 2.50 in currency
/// assert_eq!(amount.as_i64(), 250);
/// assert_eq!(amount.to_string_2dp(), "2.50");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn to_string_2dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.2}", bd)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Scale to 2 decimal places
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}
