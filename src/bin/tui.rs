use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use folio_domain::GeneratedReport;
use folio_ui_tui::app::{AppContext, DefaultSheet};

/// Browse the sheets of a generated report in the terminal.
#[derive(Parser)]
#[command(name = "folio", version)]
struct Cli {
    /// Path to a report JSON file.
    report: PathBuf,

    /// Sheet to open first. Defaults to the first sheet in the report.
    #[arg(long)]
    sheet: Option<String>,

    /// Write logs to this file. The terminal itself stays clean.
    #[arg(long, env = "FOLIO_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let report = GeneratedReport::load_from_path(&cli.report)?;
    tracing::info!(
        company = %report.company,
        sheets = report.sheets.len(),
        "opening report viewer"
    );
    let default_sheet = match cli.sheet {
        Some(name) => DefaultSheet::ByName(name),
        None => DefaultSheet::First,
    };
    folio_ui_tui::start(report, AppContext::new(default_sheet))
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
