//! The in-memory transaction ledger
//!
//! An ordered, append-only collection of transactions, alive for the
//! process lifetime only. Insertion order is preserved for the register
//! view; aggregation does not depend on it.

use super::transaction::Transaction;

/// The ordered collection of all recorded transactions
///
/// Owned by the CLI session driving it and passed by reference to the
/// import service and the reports; there are no hidden process-wide
/// statics.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one transaction at the end
    ///
    /// Takes the record by value; never fails.
    pub fn append(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    /// Iterate over transactions in insertion order
    ///
    /// Each call yields a fresh read-only traversal.
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Check whether any transactions have been appended
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Number of recorded transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
