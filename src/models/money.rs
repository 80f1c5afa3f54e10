//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Accumulation is exact integer arithmetic; rounding to two decimal
//! places happens only when an amount is formatted for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::{SpendlogError, SpendlogResult};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Using i64 cents avoids floating-point drift when summing many records and
/// supports amounts far beyond any realistic ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use spendlog::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole currency units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional cents portion (0-99)
    pub const fn fraction_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts plain decimal forms: "1200.50", "1200.5", "1200", with an
    /// optional leading minus sign. Digits beyond the second decimal place
    /// are truncated to cents. Anything else is an `InvalidAmount` error
    /// carrying the offending text.
    pub fn parse(s: &str) -> SpendlogResult<Self> {
        let invalid = || SpendlogError::InvalidAmount(s.to_string());
        let trimmed = s.trim();

        let (negative, trimmed) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        if trimmed.is_empty() {
            return Err(invalid());
        }

        let cents = if let Some((units_str, fraction_str)) = trimmed.split_once('.') {
            let units: i64 = units_str.parse().map_err(|_| invalid())?;

            if !fraction_str.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }

            // Pad or truncate the fraction to 2 digits
            let fraction: i64 = match fraction_str.len() {
                0 => 0,
                1 => fraction_str.parse::<i64>().map_err(|_| invalid())? * 10,
                _ => fraction_str[..2].parse().map_err(|_| invalid())?,
            };

            units * 100 + fraction
        } else {
            // Integer form - whole currency units
            trimmed.parse::<i64>().map_err(|_| invalid())? * 100
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency prefix, e.g. "Rs. 1200.50"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{} {}", symbol, self)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.fraction_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.fraction_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
