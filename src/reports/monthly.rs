//! Monthly summary report
//!
//! Aggregates ledger transactions for one calendar month: total income,
//! total expense, balance, and a per-(kind, category) breakdown.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;

use serde::{Serialize, Serializer};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Ledger, Money, ReportMonth, TransactionKind};

/// Breakdown key: the (kind, category) pair
///
/// The structured pair is the map key; the "kind-category" string form is
/// used only for display and serialization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryKey {
    pub kind: TransactionKind,
    pub category: String,
}

impl CategoryKey {
    /// Create a breakdown key
    pub fn new(kind: TransactionKind, category: impl Into<String>) -> Self {
        Self {
            kind,
            category: category.into(),
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.category)
    }
}

impl Serialize for CategoryKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Aggregated income/expense totals for one (month, year) pair
///
/// A transient value, recomputed per query; never stored.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    /// The queried month
    pub month: ReportMonth,
    /// Sum of amounts of included income transactions
    pub total_income: Money,
    /// Sum of amounts of included expense transactions
    pub total_expense: Money,
    /// total_income - total_expense
    pub balance: Money,
    /// Per-(kind, category) sums over the included transactions
    pub breakdown: BTreeMap<CategoryKey, Money>,
    /// Number of included transactions
    pub transaction_count: usize,
}

impl MonthlySummary {
    /// Generate a summary for the given month
    ///
    /// Scans every record once; a record is included iff its date's month
    /// and year equal the query's (the day is ignored). Zero totals and an
    /// empty breakdown are a valid result, not an error, and the ledger is
    /// never mutated.
    pub fn generate(ledger: &Ledger, month: ReportMonth) -> Self {
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        let mut breakdown: BTreeMap<CategoryKey, Money> = BTreeMap::new();
        let mut transaction_count = 0;

        for txn in ledger.iter().filter(|t| month.contains(t.date())) {
            match txn.kind() {
                TransactionKind::Income => total_income += txn.amount(),
                TransactionKind::Expense => total_expense += txn.amount(),
            }

            let key = CategoryKey::new(txn.kind(), txn.category());
            *breakdown.entry(key).or_insert_with(Money::zero) += txn.amount();
            transaction_count += 1;
        }

        Self {
            month,
            total_income,
            total_expense,
            balance: total_income - total_expense,
            breakdown,
            transaction_count,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("== Monthly Summary for {} ==\n", self.month));
        output.push_str(&format!(
            "Total Income:  {}\n",
            self.total_income.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Total Expense: {}\n",
            self.total_expense.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Balance:       {}\n",
            self.balance.format_with_symbol(currency)
        ));
        output.push_str(&format!("Transactions:  {}\n", self.transaction_count));

        output.push_str("\nBreakdown by Category:\n");
        if self.breakdown.is_empty() {
            output.push_str("  (none)\n");
        } else {
            for (key, amount) in &self.breakdown {
                output.push_str(&format!(
                    "  {}: {}\n",
                    key,
                    amount.format_with_symbol(currency)
                ));
            }
        }

        output
    }

    /// Export the summary to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> SpendlogResult<()> {
        let export_err = |e: std::io::Error| SpendlogError::Export(e.to_string());

        writeln!(writer, "Month,Kind,Category,Amount").map_err(export_err)?;

        for (key, amount) in &self.breakdown {
            writeln!(
                writer,
                "{},{},{},{}",
                self.month, key.kind, key.category, amount
            )
            .map_err(export_err)?;
        }

        writeln!(writer, "{},TOTAL INCOME,,{}", self.month, self.total_income)
            .map_err(export_err)?;
        writeln!(
            writer,
            "{},TOTAL EXPENSE,,{}",
            self.month, self.total_expense
        )
        .map_err(export_err)?;
        writeln!(writer, "{},BALANCE,,{}", self.month, self.balance).map_err(export_err)?;

        Ok(())
    }
}
