use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_import_command, handle_list_command, handle_summary_command, run_interactive,
};
use spendlog::config::{paths::SpendlogPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Command-line personal expense tracker",
    long_about = "spendlog records income and expense transactions, loads them \
                  from comma-delimited text files, and reports monthly totals \
                  with a per-category breakdown."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all transactions from a ledger file
    List {
        /// Path to the ledger file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show the monthly summary for a period
    #[command(alias = "report")]
    Summary {
        /// Report period (e.g. "2025-06")
        period: String,

        /// Path to the ledger file
        #[arg(short, long)]
        file: PathBuf,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a ledger file and report how many records load
    Import {
        /// Path to the ledger file
        file: PathBuf,
    },

    /// Launch the interactive menu session
    #[command(alias = "menu")]
    Interactive,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpendlogPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::List { file }) => {
            handle_list_command(&file, &settings)?;
        }
        Some(Commands::Summary {
            period,
            file,
            output,
            json,
        }) => {
            handle_summary_command(&period, &file, output, json, &settings)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&file)?;
        }
        Some(Commands::Interactive) => {
            run_interactive(&settings)?;
        }
        Some(Commands::Config) => {
            println!("spendlog Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("spendlog - Command-line personal expense tracker");
            println!();
            println!("Run 'spendlog --help' for usage information.");
            println!("Run 'spendlog interactive' to launch the menu session.");
        }
    }

    Ok(())
}
