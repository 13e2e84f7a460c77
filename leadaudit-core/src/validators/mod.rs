//! Field validators for lead records.
//!
//! Each check evaluates one quality dimension of a single record and returns
//! a [`SubScore`]: an integer in 0-100 paired with a short human-readable
//! reason. Missing or blank inputs are never errors; every check has an
//! explicit policy for them.

pub mod account;
pub mod identity;

pub use account::AccountValidator;
pub use identity::IdentityValidator;

/// A single dimension's (score, reason) pair prior to weighted aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubScore {
    /// Integer score in [0, 100].
    pub score: u8,
    /// Short natural-language explanation of the score.
    pub reason: String,
}

impl SubScore {
    pub fn new(score: u8, reason: impl Into<String>) -> Self {
        Self {
            score,
            reason: reason.into(),
        }
    }
}
