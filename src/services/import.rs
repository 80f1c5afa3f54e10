//! Bulk transaction import
//!
//! Loads transactions from a comma-delimited text file where each line is
//! `kind,category,amount,date` with the date in YYYY-MM-DD form. Lines that
//! do not decompose into exactly four fields are silently skipped; lines
//! whose fields fail validation are skipped with a recorded error. Neither
//! aborts the batch.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{parse_date, Ledger, Money, Transaction, TransactionKind};

/// Number of fields a valid import line decomposes into
const FIELDS_PER_LINE: usize = 4;

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Number of transactions appended to the ledger
    pub imported: usize,
    /// Number of lines skipped for not having exactly four fields
    pub skipped: usize,
    /// Number of lines rejected by field validation
    pub errors: usize,
    /// Validation error messages keyed by 1-based line number
    pub error_messages: HashMap<usize, String>,
}

impl ImportResult {
    fn record_error(&mut self, line: usize, message: String) {
        self.errors += 1;
        self.error_messages.insert(line, message);
    }
}

/// Import transactions from a file into the ledger
///
/// Only a failure to open the file aborts the call; per-line problems are
/// tallied in the returned result and loading continues.
pub fn load_from_path(ledger: &mut Ledger, path: &Path) -> SpendlogResult<ImportResult> {
    let file = File::open(path).map_err(|e| {
        SpendlogError::Import(format!("Failed to open {}: {}", path.display(), e))
    })?;
    load_from_reader(ledger, file)
}

/// Import transactions from any reader into the ledger
pub fn load_from_reader<R: Read>(ledger: &mut Ledger, reader: R) -> SpendlogResult<ImportResult> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut result = ImportResult::default();

    for (idx, record) in csv_reader.records().enumerate() {
        let line = idx + 1;

        let record = match record {
            Ok(record) => record,
            Err(e) => {
                result.record_error(line, format!("Unreadable line: {}", e));
                continue;
            }
        };

        if record.len() != FIELDS_PER_LINE {
            result.skipped += 1;
            continue;
        }

        match parse_record(&record) {
            Ok(txn) => {
                ledger.append(txn);
                result.imported += 1;
            }
            Err(e) => result.record_error(line, e.to_string()),
        }
    }

    Ok(result)
}

/// Parse one four-field record into a transaction
///
/// Textual parsing is its own stage; record construction from the typed
/// values cannot fail.
fn parse_record(record: &StringRecord) -> SpendlogResult<Transaction> {
    let kind = TransactionKind::from_str(&record[0])?;
    let amount = Money::parse(&record[2])?;
    let date = parse_date(&record[3])?;
    Ok(Transaction::new(kind, &record[1], amount, date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn load(data: &str) -> (Ledger, ImportResult) {
        let mut ledger = Ledger::new();
        let result = load_from_reader(&mut ledger, data.as_bytes()).unwrap();
        (ledger, result)
    }

    #[test]
    fn test_load_valid_lines() {
        let data = "income,salary,50000.00,2025-06-01\n\
                    expense,food,1200.50,2025-06-15\n\
                    expense,rent,8000.00,2025-07-01\n";
        let (ledger, result) = load(data);

        assert_eq!(result.imported, 3);
        assert_eq!(result.skipped, 0);
        assert_eq!(result.errors, 0);
        assert_eq!(ledger.len(), 3);

        let first = ledger.iter().next().unwrap();
        assert_eq!(first.category(), "salary");
        assert_eq!(first.amount().cents(), 5_000_000);
        assert_eq!(first.date(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn test_wrong_field_count_is_silently_skipped() {
        let data = "income,salary,50000.00,2025-06-01\n\
                    expense,food,12.00\n\
                    expense,rent,8000.00,2025-07-01,extra\n";
        let (ledger, result) = load(data);

        assert_eq!(result.imported, 1);
        assert_eq!(result.skipped, 2);
        assert_eq!(result.errors, 0);
        assert!(result.error_messages.is_empty());
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_invalid_fields_are_recorded_and_do_not_abort() {
        let data = "income,salary,50000.00,2025-06-01\n\
                    expense,food,abc,2025-06-15\n\
                    transfer,rent,8000.00,2025-07-01\n\
                    expense,gifts,10.00,2025-02-30\n\
                    expense,rent,8000.00,2025-07-01\n";
        let (ledger, result) = load(data);

        assert_eq!(result.imported, 2);
        assert_eq!(result.errors, 3);
        assert_eq!(ledger.len(), 2);

        assert!(result.error_messages[&2].contains("Invalid amount"));
        assert!(result.error_messages[&3].contains("Invalid kind"));
        assert!(result.error_messages[&4].contains("Invalid date"));
    }

    #[test]
    fn test_fields_are_trimmed_and_normalized() {
        let data = "Income , Salary , 50000.00 , 2025-06-01\n";
        let (ledger, result) = load(data);

        assert_eq!(result.imported, 1);
        let txn = ledger.iter().next().unwrap();
        assert_eq!(txn.kind(), TransactionKind::Income);
        assert_eq!(txn.category(), "salary");
    }

    #[test]
    fn test_empty_input() {
        let (ledger, result) = load("");
        assert_eq!(result.imported, 0);
        assert_eq!(result.skipped, 0);
        assert_eq!(result.errors, 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_load_from_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "income,salary,50000.00,2025-06-01").unwrap();
        writeln!(file, "expense,food,1200.50,2025-06-15").unwrap();

        let mut ledger = Ledger::new();
        let result = load_from_path(&mut ledger, file.path()).unwrap();
        assert_eq!(result.imported, 2);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_missing_file_is_an_import_error() {
        let mut ledger = Ledger::new();
        let err = load_from_path(&mut ledger, Path::new("/nonexistent/input.txt")).unwrap_err();
        assert!(matches!(err, SpendlogError::Import(_)));
    }
}
