//! End-to-end tests for the spendlog binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn spendlog(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    // Keep the test run away from any real user configuration
    cmd.env("SPENDLOG_CONFIG_DIR", config_dir);
    cmd
}

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

const SAMPLE: &str = "income,salary,50000.00,2025-06-01\n\
                      expense,food,1200.50,2025-06-15\n\
                      expense,rent,8000.00,2025-07-01\n";

#[test]
fn summary_reports_monthly_totals() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "input.txt", SAMPLE);

    spendlog(dir.path())
        .args(["summary", "2025-06", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("== Monthly Summary for 2025-06 =="))
        .stdout(predicate::str::contains("Total Income:  Rs. 50000.00"))
        .stdout(predicate::str::contains("Total Expense: Rs. 1200.50"))
        .stdout(predicate::str::contains("Balance:       Rs. 48799.50"))
        .stdout(predicate::str::contains("income-salary: Rs. 50000.00"))
        .stdout(predicate::str::contains("expense-food: Rs. 1200.50"));
}

#[test]
fn summary_handles_expense_only_month() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "input.txt", SAMPLE);

    spendlog(dir.path())
        .args(["summary", "2025-07", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Income:  Rs. 0.00"))
        .stdout(predicate::str::contains("Total Expense: Rs. 8000.00"))
        .stdout(predicate::str::contains("Balance:       Rs. -8000.00"))
        .stdout(predicate::str::contains("expense-rent: Rs. 8000.00"));
}

#[test]
fn summary_of_empty_month_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "input.txt", SAMPLE);

    spendlog(dir.path())
        .args(["summary", "2024-01", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Income:  Rs. 0.00"))
        .stdout(predicate::str::contains("Total Expense: Rs. 0.00"))
        .stdout(predicate::str::contains("(none)"));
}

#[test]
fn summary_rejects_malformed_period() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "input.txt", SAMPLE);

    spendlog(dir.path())
        .args(["summary", "06/2025", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period format"));
}

#[test]
fn summary_exports_json() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "input.txt", SAMPLE);

    spendlog(dir.path())
        .args(["summary", "2025-06", "--json", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"income-salary\": 5000000"))
        .stdout(predicate::str::contains("\"transaction_count\": 2"));
}

#[test]
fn summary_exports_csv_file() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "input.txt", SAMPLE);
    let out = dir.path().join("report.csv");

    spendlog(dir.path())
        .args(["summary", "2025-07", "--file"])
        .arg(&file)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report exported to"));

    let csv = std::fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Month,Kind,Category,Amount\n"));
    assert!(csv.contains("2025-07,expense,rent,8000.00"));
    assert!(csv.contains("2025-07,BALANCE,,-8000.00"));
}

#[test]
fn import_reports_loaded_count() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "input.txt", SAMPLE);

    spendlog(dir.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 transaction(s) loaded from file."));
}

#[test]
fn import_skips_bad_lines_without_failing() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(
        &dir,
        "input.txt",
        "income,salary,50000.00,2025-06-01\n\
         expense,food,12.00\n\
         expense,food,abc,2025-06-15\n",
    );

    spendlog(dir.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 transaction(s) loaded from file."))
        .stdout(predicate::str::contains("1 line(s) skipped (wrong field count)."))
        .stdout(predicate::str::contains("line 3: Invalid amount: 'abc'"));
}

#[test]
fn import_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    spendlog(dir.path())
        .args(["import", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"));
}

#[test]
fn list_prints_canonical_rows_in_order() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "input.txt", SAMPLE);

    spendlog(dir.path())
        .args(["list", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("== All Transactions =="))
        .stdout(predicate::str::contains(
            "2025-06-01 | INCOME | salary | Rs. 50000.00",
        ))
        .stdout(predicate::str::contains(
            "2025-06-15 | EXPENSE | food | Rs. 1200.50",
        ));
}

#[test]
fn list_of_empty_file_prints_placeholder() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "empty.txt", "");

    spendlog(dir.path())
        .args(["list", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions to display."));
}

#[test]
fn config_prints_paths_and_settings() {
    let dir = TempDir::new().unwrap();

    spendlog(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("spendlog Configuration"))
        .stdout(predicate::str::contains("Currency symbol: Rs."));
}

#[test]
fn interactive_session_add_and_summarize() {
    let dir = TempDir::new().unwrap();

    spendlog(dir.path())
        .arg("interactive")
        .write_stdin(
            "1\nincome\nSalary\n50000.00\n2025-06-01\n\
             3\n2025-06\n\
             4\n\
             5\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction added successfully."))
        .stdout(predicate::str::contains("Total Income:  Rs. 50000.00"))
        .stdout(predicate::str::contains(
            "2025-06-01 | INCOME | salary | Rs. 50000.00",
        ))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn interactive_session_rejects_bad_kind_and_continues() {
    let dir = TempDir::new().unwrap();

    spendlog(dir.path())
        .arg("interactive")
        .write_stdin("1\ntransfer\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid kind: 'transfer'"))
        .stdout(predicate::str::contains("Goodbye!"));
}
