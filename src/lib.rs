//! spendlog - Command-line personal expense tracker
//!
//! This library provides the core functionality for the spendlog CLI:
//! an in-memory ledger of income/expense transactions, bulk import from
//! comma-delimited text files, and monthly aggregate reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, the ledger)
//! - `services`: Business logic layer (bulk import)
//! - `reports`: Monthly summary aggregation
//! - `display`: Terminal rendering of records
//! - `cli`: Command handlers and the interactive menu session

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{SpendlogError, SpendlogResult};
