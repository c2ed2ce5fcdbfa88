use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Triton burst-wise ocean wave analyzer.
#[derive(Parser)]
#[command(
    name = "triton",
    version,
    about = "Burst-wise ocean wave analysis from water level or pressure records"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Analyze a burst time series and write wave parameters.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "triton.toml")]
    pub config: PathBuf,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output JSON path from config; stdout when unset.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
