//! Business logic layer
//!
//! Services operate on a ledger passed in by the caller; they own no state
//! of their own.

pub mod import;

pub use import::{load_from_path, load_from_reader, ImportResult};
