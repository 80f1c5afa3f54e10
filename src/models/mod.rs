//! Core data models for spendlog
//!
//! This module contains the data structures that represent the ledger
//! domain: money amounts, transactions, the ledger itself, and the
//! month key reports are queried for.

pub mod ledger;
pub mod money;
pub mod month;
pub mod transaction;

pub use ledger::Ledger;
pub use money::Money;
pub use month::ReportMonth;
pub use transaction::{parse_date, Transaction, TransactionKind, DATE_FORMAT};
