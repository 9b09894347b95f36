//! Videofile CLI - Command-line interface
//!
//! Renders video pages and inspects caption labels from fixture files.

mod commands;

use clap::Parser;
use videofile_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "videofile")]
#[command(about = "Render video playback pages")]
struct Cli {
    /// Console log level
    #[arg(long, value_enum, default_value_t = CliLogLevel::Warn, global = true)]
    log_level: CliLogLevel,

    /// Directory for a full trace log of this run
    #[arg(long, global = true)]
    logs_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    commands::handle_command(cli.command)
}
