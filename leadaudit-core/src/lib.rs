// leadaudit-core/src/lib.rs
//! # LeadAudit Core Library
//!
//! `leadaudit-core` provides the rule-based scoring pipeline for auditing
//! batches of contact/account records. It evaluates each record across six
//! independent quality dimensions, combines the sub-scores through a
//! weighted aggregation engine, and audits any vendor-reported accuracy
//! claim against the computed score.
//!
//! The library is single-pass and record-independent: each record's
//! validators read only that record, and the ordered result sequence always
//! matches input order.
//!
//! ## Modules
//!
//! * `config`: Explicitly constructed weight tables and pattern tables.
//! * `record`: The `LeadRecord` row model, tri-state `FieldState`, and CSV ingestion.
//! * `validators`: Identity and account checks, each yielding a `SubScore`.
//! * `probe`: The injected `UrlProber` capability for the external-presence check.
//! * `engine`: Weighted aggregation into score, confidence band, and vendor alignment.
//! * `audit`: The batch orchestrator assembling per-record `AuditResult`s.
//! * `errors`: The structured `AuditError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use leadaudit_core::{AuditConfig, Auditor, LeadRecord, ProbeOutcome, UrlProber};
//!
//! struct OfflineProber;
//!
//! impl UrlProber for OfflineProber {
//!     fn probe(&self, _url: &str) -> ProbeOutcome {
//!         ProbeOutcome::Unreachable
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let auditor = Auditor::new(&AuditConfig::default(), Box::new(OfflineProber))?;
//!     let record = LeadRecord {
//!         row_number: 2,
//!         first_name: Some("Jane".to_string()),
//!         job_title: Some("VP of Sales".to_string()),
//!         ..LeadRecord::default()
//!     };
//!     let results = auditor.run(&[record]);
//!     assert_eq!(results.len(), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! File-level problems (missing or unparseable input) surface as
//! [`AuditError`] and abort a run. Record-level problems never do: missing
//! fields, malformed vendor scores, and probe failures all degrade into
//! scores and reason strings.

pub mod audit;
pub mod config;
pub mod engine;
pub mod errors;
pub mod probe;
pub mod record;
pub mod validators;

/// Re-exports the configuration types for the scoring pipeline.
pub use config::{AuditConfig, IdentityConfig, ScoringWeights, SeniorityPattern};

/// Re-exports the structured error type.
pub use errors::AuditError;

/// Re-exports the record model and CSV ingestion.
pub use record::{read_records, FieldState, LeadRecord};

/// Re-exports the probing capability and its live implementation.
pub use probe::{HttpProber, ProbeOutcome, UrlProber};

/// Re-exports the validators and their sub-score output.
pub use validators::{AccountValidator, IdentityValidator, SubScore};

/// Re-exports the scoring engine and its output types.
pub use engine::{
    Assessment, ConfidenceBand, DimensionScores, ScoreCard, ScoringEngine, VendorAlignment,
};

/// Re-exports the batch orchestrator and its per-record result.
pub use audit::{AuditResult, Auditor};
