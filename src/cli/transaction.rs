//! CLI command for listing transactions

use std::path::Path;

use crate::config::Settings;
use crate::display::format_register;
use crate::error::SpendlogResult;
use crate::models::Ledger;
use crate::services::import;

/// Handle the `list` command: load a ledger file and print the register
pub fn handle_list_command(file: &Path, settings: &Settings) -> SpendlogResult<()> {
    let mut ledger = Ledger::new();
    let result = import::load_from_path(&mut ledger, file)?;

    print!("{}", format_register(&ledger, settings));
    super::report_import_problems(&result);

    Ok(())
}
