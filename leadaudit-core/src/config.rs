//! Configuration management for `leadaudit-core`.
//!
//! This module defines the explicitly constructed configuration objects for
//! the scoring pipeline: the dimension weight table consumed by the scoring
//! engine and the pattern tables consumed by the identity validators. There
//! is no hidden global state; callers build (or default) a config and pass it
//! in at construction time.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::AuditError;

/// Tolerance when checking that the dimension weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Email domains operated by consumer mail providers. An address on one of
/// these domains cannot corroborate a corporate identity.
pub static DEFAULT_PERSONAL_PROVIDERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();
    set.extend(["gmail.com", "yahoo.com", "outlook.com", "hotmail.com"]);
    set
});

/// Weights for the six scoring dimensions. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub email: f64,
    pub role: f64,
    pub account: f64,
    pub freshness: f64,
    pub geo: f64,
    pub external: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            email: 0.25,
            role: 0.20,
            account: 0.15,
            freshness: 0.15,
            geo: 0.15,
            external: 0.10,
        }
    }
}

impl ScoringWeights {
    /// Returns the weights as named entries, in the fixed dimension order
    /// used everywhere in this crate.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("email", self.email),
            ("role", self.role),
            ("account", self.account),
            ("freshness", self.freshness),
            ("geo", self.geo),
            ("external", self.external),
        ]
    }

    /// Validates weight integrity (non-negative, summing to 1.0).
    ///
    /// Collects every violation before failing so a misconfigured table is
    /// reported in a single pass.
    pub fn validate(&self) -> Result<(), AuditError> {
        let mut errors = Vec::new();

        for (name, value) in self.entries() {
            if value < 0.0 {
                errors.push(format!("weight '{}' is negative ({})", name, value));
            }
        }

        let total: f64 = self.entries().iter().map(|(_, v)| v).sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            errors.push(format!("dimension weights must sum to 1.0, got {}", total));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AuditError::InvalidConfig(errors.join("; ")))
        }
    }
}

/// A text-matching rule mapping job-title phrasing to a seniority level.
///
/// Patterns are tested in declaration order and the first match wins, so
/// more senior levels must come first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeniorityPattern {
    /// The resolved level name (e.g. "Executive").
    pub level: String,
    /// The regex pattern string tested against the lowercased job title.
    pub pattern: String,
}

/// Configuration for the identity validators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Email domains treated as personal (non-corporate) providers.
    pub personal_providers: Vec<String>,
    /// Ordered seniority patterns, most senior first.
    pub seniority_patterns: Vec<SeniorityPattern>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            personal_providers: DEFAULT_PERSONAL_PROVIDERS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            seniority_patterns: vec![
                SeniorityPattern {
                    level: "Executive".to_string(),
                    pattern: r"\b(vp|vice president|cxo|chief|executive|head|founder|ceo|cto|cfo)\b"
                        .to_string(),
                },
                SeniorityPattern {
                    level: "Director".to_string(),
                    pattern: r"\b(director|associate director|sr manager|senior manager)\b"
                        .to_string(),
                },
                SeniorityPattern {
                    level: "Manager".to_string(),
                    pattern: r"\b(manager|lead|supervisor|mngr)\b".to_string(),
                },
            ],
        }
    }
}

/// Top-level configuration for a full audit run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    pub weights: ScoringWeights,
    pub identity: IdentityConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!(ScoringWeights::default().validate().is_ok());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = ScoringWeights {
            email: -0.25,
            role: 0.70,
            ..ScoringWeights::default()
        };
        let err = weights.validate().unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_weight_sum_mismatch_rejected() {
        let weights = ScoringWeights {
            email: 0.50,
            ..ScoringWeights::default()
        };
        let err = weights.validate().unwrap_err();
        assert!(err.to_string().contains("sum to 1.0"));
    }

    #[test]
    fn test_default_seniority_order_is_most_senior_first() {
        let config = IdentityConfig::default();
        let levels: Vec<&str> = config
            .seniority_patterns
            .iter()
            .map(|p| p.level.as_str())
            .collect();
        assert_eq!(levels, vec!["Executive", "Director", "Manager"]);
    }
}
