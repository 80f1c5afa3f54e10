//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the models, services, and reports.

pub mod import;
pub mod interactive;
pub mod report;
pub mod transaction;

pub use import::handle_import_command;
pub use interactive::run_interactive;
pub use report::handle_summary_command;
pub use transaction::handle_list_command;

use crate::services::ImportResult;

/// Report per-line import problems on stderr without disturbing the
/// command's stdout output
pub(crate) fn report_import_problems(result: &ImportResult) {
    if result.skipped > 0 {
        eprintln!("{} line(s) skipped (wrong field count).", result.skipped);
    }

    if !result.error_messages.is_empty() {
        let mut lines: Vec<_> = result.error_messages.iter().collect();
        lines.sort_by_key(|(line, _)| **line);
        for (line, msg) in lines {
            eprintln!("line {}: {}", line, msg);
        }
    }
}
