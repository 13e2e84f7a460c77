// leadaudit/src/lib.rs
//! # LeadAudit CLI Application
//!
//! This crate provides the command-line surface for the LeadAudit scoring
//! engine: argument parsing, logger bootstrap, and the audit command that
//! wires file input, the live URL prober, and the JSON result artifact
//! together.

pub mod cli;
pub mod commands;
pub mod logger;
