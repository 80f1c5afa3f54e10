//! Report month representation
//!
//! The (year, month) pair a monthly summary is queried for. Parsed from the
//! "YYYY-MM" textual form at the CLI boundary; the core only ever sees the
//! validated pair.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SpendlogError, SpendlogResult};

/// A calendar month of a specific year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportMonth {
    year: i32,
    month: u32,
}

impl ReportMonth {
    /// Create a report month, validating the month number
    pub fn new(year: i32, month: u32) -> SpendlogResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(SpendlogError::Validation(format!(
                "Month out of range: {} (expected 1-12)",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Parse a month from the "YYYY-MM" form (e.g. "2025-06")
    pub fn parse(s: &str) -> SpendlogResult<Self> {
        let invalid = || {
            SpendlogError::Validation(format!(
                "Invalid period format: '{}'. Use YYYY-MM (e.g. 2025-06)",
                s
            ))
        };

        let (year_str, month_str) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }

    /// The current calendar month
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// The year component
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month component (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check if a date falls within this month (the day is ignored)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for ReportMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
