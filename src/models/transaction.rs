//! Transaction model
//!
//! Represents a single recorded income or expense event with a category,
//! an amount, and a calendar date. Records are immutable once constructed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SpendlogError, SpendlogResult};

use super::money::Money;

/// The fixed textual form for transaction dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The income/expense classification of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// The canonical lowercase form of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Check if this is an income kind
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    /// Check if this is an expense kind
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl FromStr for TransactionKind {
    type Err = SpendlogError;

    /// Parse a kind, case-insensitively. Anything other than "income" or
    /// "expense" is an `InvalidKind` error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("income") {
            Ok(Self::Income)
        } else if trimmed.eq_ignore_ascii_case("expense") {
            Ok(Self::Expense)
        } else {
            Err(SpendlogError::InvalidKind(s.to_string()))
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a transaction date in the fixed YYYY-MM-DD form
///
/// Impossible calendar dates (e.g. 2025-02-30) are rejected the same way as
/// malformed text.
pub fn parse_date(s: &str) -> SpendlogResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| SpendlogError::InvalidDate(s.to_string()))
}

/// A single recorded income or expense event
///
/// Fields are private and set only at construction; `Ledger::append` takes
/// records by value, so a stored record cannot be aliased or mutated from
/// outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Income or expense
    kind: TransactionKind,

    /// Free-text label, canonical lowercase
    category: String,

    /// Transaction amount in currency units
    amount: Money,

    /// Calendar date, no time component
    date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction from already-typed values
    ///
    /// Never fails; the category is normalized to lowercase. Negative
    /// amounts are accepted (rejecting them is the caller's concern).
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            category: category.into().trim().to_lowercase(),
            amount,
            date,
        }
    }

    /// Create a transaction from textual fields
    ///
    /// Composes the three field parsers, so the error pinpoints the first
    /// offending field: `InvalidKind`, `InvalidAmount`, or `InvalidDate`.
    pub fn from_text(kind: &str, category: &str, amount: &str, date: &str) -> SpendlogResult<Self> {
        let kind = TransactionKind::from_str(kind)?;
        let amount = Money::parse(amount)?;
        let date = parse_date(date)?;
        Ok(Self::new(kind, category, amount, date))
    }

    /// The income/expense classification
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// The category label (lowercase)
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The transaction amount
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The transaction date
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
