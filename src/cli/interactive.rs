//! Interactive menu session
//!
//! A numbered-menu loop over a session-lifetime ledger: add records
//! manually, bulk-load from a file, view the monthly summary, or list
//! everything. Invalid input reports the problem and shows the menu
//! again; only "Exit" (or end of input) leaves the loop.

use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use crate::config::Settings;
use crate::display::format_register;
use crate::error::SpendlogResult;
use crate::models::{parse_date, Ledger, Money, ReportMonth, Transaction, TransactionKind};
use crate::reports::MonthlySummary;
use crate::services::import;

/// Run the interactive menu session
pub fn run_interactive(settings: &Settings) -> SpendlogResult<()> {
    let mut ledger = Ledger::new();

    loop {
        println!();
        println!("== Expense Tracker Menu ==");
        println!("1. Add transaction manually");
        println!("2. Load transactions from file");
        println!("3. View monthly summary");
        println!("4. View all transactions");
        println!("5. Exit");

        let choice = match prompt("Choose option: ")? {
            Some(choice) => choice,
            // End of input counts as exiting
            None => {
                println!("Goodbye!");
                return Ok(());
            }
        };

        match choice.as_str() {
            "1" => add_manual_entry(&mut ledger)?,
            "2" => load_from_file(&mut ledger)?,
            "3" => show_monthly_summary(&ledger, settings)?,
            "4" => print!("{}", format_register(&ledger, settings)),
            "5" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid choice."),
        }
    }
}

/// Prompt for a manual entry and append it
///
/// Validation failures are reported and abandon the entry; they never end
/// the session.
fn add_manual_entry(ledger: &mut Ledger) -> SpendlogResult<()> {
    let Some(kind_input) = prompt("Enter kind (income/expense): ")? else {
        return Ok(());
    };
    let kind = match TransactionKind::from_str(&kind_input) {
        Ok(kind) => kind,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let Some(category) = prompt("Enter category (e.g. salary/food/rent): ")? else {
        return Ok(());
    };

    let Some(amount_input) = prompt("Enter amount: ")? else {
        return Ok(());
    };
    let amount = match Money::parse(&amount_input) {
        Ok(amount) => amount,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let Some(date_input) = prompt("Enter date (YYYY-MM-DD, blank for today): ")? else {
        return Ok(());
    };
    let date = if date_input.is_empty() {
        chrono::Local::now().date_naive()
    } else {
        match parse_date(&date_input) {
            Ok(date) => date,
            Err(e) => {
                println!("{}", e);
                return Ok(());
            }
        }
    };

    ledger.append(Transaction::new(kind, category, amount, date));
    println!("Transaction added successfully.");
    Ok(())
}

/// Prompt for a filename and bulk-load it into the ledger
fn load_from_file(ledger: &mut Ledger) -> SpendlogResult<()> {
    let Some(filename) = prompt("Enter filename to load (e.g. input.txt): ")? else {
        return Ok(());
    };

    match import::load_from_path(ledger, Path::new(&filename)) {
        Ok(result) => {
            println!("{} transaction(s) loaded from file.", result.imported);
            if result.skipped > 0 {
                println!("{} line(s) skipped (wrong field count).", result.skipped);
            }
            if result.errors > 0 {
                println!("{} line(s) rejected.", result.errors);
            }
        }
        Err(e) => println!("Error loading file: {}", e),
    }

    Ok(())
}

/// Prompt for a month and print its summary
fn show_monthly_summary(ledger: &Ledger, settings: &Settings) -> SpendlogResult<()> {
    let Some(period) = prompt("Enter month (YYYY-MM, e.g. 2025-06): ")? else {
        return Ok(());
    };

    match ReportMonth::parse(&period) {
        Ok(month) => {
            let summary = MonthlySummary::generate(ledger, month);
            print!("{}", summary.format_terminal(&settings.currency_symbol));
        }
        Err(e) => println!("{}", e),
    }

    Ok(())
}

/// Print a prompt and read one trimmed line from stdin
///
/// Returns `None` at end of input.
fn prompt(label: &str) -> SpendlogResult<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes_read = io::stdin().read_line(&mut input)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
