//! Transaction display formatting
//!
//! Provides the canonical one-line rendering of a record and the full
//! register view consumed by the `list` command and the interactive menu.

use crate::config::Settings;
use crate::models::{Ledger, Transaction};

/// Format a single transaction in the canonical row form:
/// `DATE | KIND | category | <currency> amount`
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{} | {} | {} | {}",
        txn.date().format(&settings.date_format),
        txn.kind().as_str().to_uppercase(),
        txn.category(),
        txn.amount().format_with_symbol(&settings.currency_symbol)
    )
}

/// Format the whole ledger as a register, one line per record in
/// insertion order
pub fn format_register(ledger: &Ledger, settings: &Settings) -> String {
    if ledger.is_empty() {
        return "No transactions to display.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("== All Transactions ==\n");
    for txn in ledger.iter() {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    output
}
