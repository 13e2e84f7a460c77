// leadaudit/src/main.rs
//! LeadAudit entry point.
//!
//! Parses the CLI, initializes logging, and runs the batch audit.

use anyhow::Result;
use clap::Parser;

use leadaudit::cli::Cli;
use leadaudit::commands::audit::{run_audit, AuditOptions};
use leadaudit::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(Some(log::LevelFilter::Info));
    }

    run_audit(AuditOptions { input: args.input })
}
