//! Money in smallest currency units.
//!
//! Stored amounts are non-negative integers in minor units (e.g. cents), so
//! sums and quantity multiplications are exact. Form input arrives as decimal
//! strings ("15.99") and is parsed, never stored as floating point.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A non-negative monetary amount in minor units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor_units(minor: u64) -> Self {
        Self(minor)
    }

    pub const fn minor_units(&self) -> u64 {
        self.0
    }

    /// Parse a decimal string as entered in a form ("5", "15.99", "0.5").
    ///
    /// Accepts at most two fraction digits and no sign. Anything else is a
    /// validation failure attributed to `field`.
    pub fn parse(field: &str, input: &str) -> DomainResult<Self> {
        let s = input.trim();
        if s.is_empty() {
            return Err(DomainError::validation_field(field, "is required"));
        }

        let invalid = || DomainError::validation_field(field, "must be a non-negative amount");

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if frac.len() > 2 {
            return Err(DomainError::validation_field(
                field,
                "supports at most two decimal places",
            ));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac))
            .map(Money)
            .ok_or_else(invalid)
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiply by a line quantity; `None` on overflow.
    pub fn checked_mul_quantity(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(quantity)).map(Money)
    }

    /// Signed difference in minor units (may be negative, e.g. net profit).
    pub fn signed_diff(self, other: Money) -> i64 {
        self.0 as i64 - other.0 as i64
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        // Saturating: aggregate views degrade rather than panic on overflow.
        Money(iter.fold(0u64, |acc, m| acc.saturating_add(m.0)))
    }
}

impl core::fmt::Display for Money {
    /// Plain decimal notation ("36.98"); currency symbols are applied by the
    /// settings-aware formatting at the view boundary.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
