//! Budget Master CLI - writes the budget workbook

use anyhow::{Context, Result};
use budget_master::budget::{self, DEFAULT_FILE_NAME};
use budget_master::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "budget-master")]
#[command(
    author,
    version,
    about = "Generate the Budget Master personal-finance spreadsheet"
)]
struct Cli {
    /// Output workbook path
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    output: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let workbook = budget::build_workbook().context("Failed to build workbook")?;
    info!(sheets = workbook.sheet_count(), "workbook assembled");

    workbook
        .save(&cli.output)
        .with_context(|| format!("Failed to save workbook to {}", cli.output.display()))?;

    println!("Budget spreadsheet created successfully!");
    println!("Saved to: {}", cli.output.display());
    println!("\nSheets created:");
    for name in workbook.sheet_names() {
        println!("  - {}", name);
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
