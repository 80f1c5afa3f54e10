//! CLI command for the monthly summary report

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Ledger, ReportMonth};
use crate::reports::MonthlySummary;
use crate::services::import;

/// Handle the `summary` command: load a ledger file, aggregate one month,
/// and print or export the report
pub fn handle_summary_command(
    period: &str,
    file: &Path,
    output: Option<PathBuf>,
    json: bool,
    settings: &Settings,
) -> SpendlogResult<()> {
    // The period is parsed at this boundary; the report only sees the
    // validated month
    let month = ReportMonth::parse(period)?;

    let mut ledger = Ledger::new();
    let result = import::load_from_path(&mut ledger, file)?;
    super::report_import_problems(&result);

    let summary = MonthlySummary::generate(&ledger, month);

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            SpendlogError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        summary.export_csv(&mut writer)?;
        println!("Report exported to {}", path.display());
    } else if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}
