//! CLI command for bulk import

use std::path::Path;

use crate::error::SpendlogResult;
use crate::models::Ledger;
use crate::services::import;

/// Handle the `import` command: validate a ledger file and print counts
pub fn handle_import_command(file: &Path) -> SpendlogResult<()> {
    let mut ledger = Ledger::new();
    let result = import::load_from_path(&mut ledger, file)?;

    println!("{} transaction(s) loaded from file.", result.imported);

    if result.skipped > 0 {
        println!("{} line(s) skipped (wrong field count).", result.skipped);
    }

    if result.errors > 0 {
        println!("{} line(s) rejected:", result.errors);
        let mut lines: Vec<_> = result.error_messages.iter().collect();
        lines.sort_by_key(|(line, _)| **line);
        for (line, msg) in lines {
            println!("  line {}: {}", line, msg);
        }
    }

    Ok(())
}
