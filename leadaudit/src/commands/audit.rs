// leadaudit/src/commands/audit.rs
//! The audit command: load a CSV batch, run the scoring pipeline, write the
//! JSON result artifact.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use leadaudit_core::{read_records, AuditConfig, Auditor, HttpProber};

/// Fixed destination of the result artifact, overwritten on every run.
pub const OUTPUT_FILE: &str = "validation_results.json";

/// Options for the audit command.
pub struct AuditOptions {
    pub input: PathBuf,
}

/// Runs the full batch audit. Either the complete result sequence is written
/// to [`OUTPUT_FILE`] or the run aborts with no output.
pub fn run_audit(opts: AuditOptions) -> Result<()> {
    if Path::new(OUTPUT_FILE).exists() {
        info!("Clearing previous results in {}...", OUTPUT_FILE);
    }

    let records = read_records(&opts.input)
        .with_context(|| format!("Failed to read input batch '{}'", opts.input.display()))?;
    debug!("Loaded {} raw rows.", records.len());

    let prober = HttpProber::new().context("Failed to initialize the URL prober")?;
    let auditor = Auditor::new(&AuditConfig::default(), Box::new(prober))
        .context("Failed to construct the auditor")?;

    let results = auditor.run(&records);

    let file = fs::File::create(OUTPUT_FILE)
        .with_context(|| format!("Failed to create output file: {}", OUTPUT_FILE))?;
    serde_json::to_writer_pretty(file, &results)
        .context("Failed to serialize audit results")?;

    info!("Done! {} records updated in {}.", results.len(), OUTPUT_FILE);
    Ok(())
}
