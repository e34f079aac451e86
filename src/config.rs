use std::path::PathBuf;

use clap::Parser;

/// Terminal stopwatch with lap splits.
#[derive(Parser, Debug, Clone)]
#[command(name = "stopwatch", version, about)]
pub struct Config {
    /// Display refresh interval in milliseconds
    #[arg(long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..=1000))]
    pub tick_ms: u64,

    /// Log filter directives, e.g. "stopwatch_core=debug" (overrides RUST_LOG)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
