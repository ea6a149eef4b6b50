//! Workbench CLI - Command-line interface
//!
//! Serves the widget pages and inspects fixture directories.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use workbench_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "workbench")]
#[command(about = "Mock server for inspecting UI widgets against JSON fixtures")]
#[command(version)]
struct Cli {
    /// Console log level (RUST_LOG overrides)
    #[arg(long, value_enum, default_value_t = CliLogLevel::Info)]
    log_level: CliLogLevel,

    /// Directory for the full debug log of the last run
    #[arg(long, default_value = "logs")]
    logs_dir: PathBuf,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_tracing_level(), Some(&cli.logs_dir))?;

    commands::handle_command(cli.command).await
}
