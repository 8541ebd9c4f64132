use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "suitecast",
    version,
    about = "Post test run results to chat webhooks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compose a notification from a results file and post it
    Send(SendArgs),
    /// List supported report types
    Modes,
    /// Print the version
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SendArgs {
    /// Notification options (YAML or JSON)
    #[arg(long, default_value = "suitecast.yaml")]
    pub config: PathBuf,

    /// Test results JSON (one run or an array of runs; only the first is reported)
    #[arg(long)]
    pub results: PathBuf,

    /// Override the configured report type (e.g. failure-details)
    #[arg(long)]
    pub report_type: Option<String>,

    /// Print the payload instead of posting it
    #[arg(long)]
    pub dry_run: bool,

    /// Skip Report Portal analysis even when configured
    #[arg(long)]
    pub no_analysis: bool,
}
