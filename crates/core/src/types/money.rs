//! Monetary amounts in integer minor currency units.
//!
//! Catalog prices and order totals are carried as whole paise (or cents)
//! so that cart and revenue arithmetic stays exact. Conversion to major
//! units happens only at the display/aggregation boundary, via
//! [`rust_decimal`].

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in minor currency units (e.g., paise for INR).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Create an amount from minor currency units.
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Get the amount in minor currency units.
    #[must_use]
    pub const fn as_minor(&self) -> i64 {
        self.0
    }

    /// Convert to major currency units as an exact decimal (two places).
    #[must_use]
    pub fn to_major(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Multiply a unit price by a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * i64::from(quantity))
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_to_major() {
        assert_eq!(Money::from_minor(150_000).to_major(), Decimal::new(1500, 0));
        assert_eq!(Money::from_minor(1_999).to_major(), Decimal::new(1999, 2));
        assert_eq!(Money::ZERO.to_major(), Decimal::ZERO);
    }

    #[test]
    fn test_times() {
        assert_eq!(Money::from_minor(2_500).times(3), Money::from_minor(7_500));
        assert_eq!(Money::from_minor(2_500).times(0), Money::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Money = [1_000, 2_000, 500].map(Money::from_minor).into_iter().sum();
        assert_eq!(total, Money::from_minor(3_500));
    }

    #[test]
    fn test_serde_transparent() {
        let money = Money::from_minor(129_900);
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, "129900");

        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, money);
    }
}
