// leadaudit/src/cli.rs
//! This file defines the command-line interface (CLI) for the leadaudit
//! application.

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "leadaudit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Audit a batch of lead records for data quality",
    long_about = "Leadaudit scores each contact/account record in a CSV batch across six \
quality dimensions (email, role, hierarchy, freshness, geography, external presence), \
assigns a confidence band, audits any vendor-reported accuracy score against the computed \
one, and writes the full result set to validation_results.json."
)]
pub struct Cli {
    /// Path to the input CSV of lead records.
    #[arg(value_name = "INPUT", default_value = "sample-data.csv", help = "Path to the input CSV of lead records.")]
    pub input: PathBuf,

    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'leadaudit' crates to DEBUG)
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,
}
