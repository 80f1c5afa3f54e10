//! Report generation
//!
//! Reports are transient values computed from a ledger snapshot; they own
//! their terminal formatting and CSV export.

pub mod monthly;

pub use monthly::{CategoryKey, MonthlySummary};
