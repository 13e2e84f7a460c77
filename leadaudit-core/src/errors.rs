//! errors.rs - Custom error types for the leadaudit-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.

use thiserror::Error;

/// This enum represents all possible error types in the `leadaudit-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AuditError {
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Failed to parse input table: {0}")]
    TableParse(#[from] csv::Error),

    #[error("Invalid scoring configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to compile seniority pattern '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Failed to build HTTP probe client: {0}")]
    ProbeClient(#[from] reqwest::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}
