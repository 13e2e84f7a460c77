//! Weighted scoring engine.
//!
//! Combines the six dimension sub-scores into a final 0-100 score, a
//! confidence band, and a vendor-alignment verdict. The engine is a pure
//! function of its inputs: no side effects, no I/O, no failure modes once
//! constructed.

use std::fmt;

use serde::Serialize;

use crate::config::ScoringWeights;
use crate::errors::AuditError;
use crate::record::FieldState;
use crate::validators::SubScore;

/// Categorical label derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ConfidenceBand::High => "High",
            ConfidenceBand::Medium => "Medium",
            ConfidenceBand::Low => "Low",
        })
    }
}

/// Verdict comparing a vendor-reported accuracy score against the computed
/// score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VendorAlignment {
    /// No vendor claim to audit, or the claim is within tolerance.
    Aligned,
    /// Vendor claims materially higher than computed.
    Overstated,
    /// Vendor claims materially lower than computed.
    Understated,
    /// Vendor data is corrupted text rather than a number.
    Unknown,
}

impl fmt::Display for VendorAlignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            VendorAlignment::Aligned => "Aligned",
            VendorAlignment::Overstated => "Overstated",
            VendorAlignment::Understated => "Understated",
            VendorAlignment::Unknown => "Unknown",
        })
    }
}

/// The engine's output triple for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub final_score: u8,
    pub band: ConfidenceBand,
    pub alignment: VendorAlignment,
}

/// Plain numeric view of the six dimension scores.
///
/// A fixed-size struct rather than a string-keyed map: every dimension is
/// present by construction, so there is no missing-key failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionScores {
    pub email: u8,
    pub role: u8,
    pub account: u8,
    pub freshness: u8,
    pub geo: u8,
    pub external: u8,
}

/// The six named sub-scores of one record, in fixed dimension order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    pub email: SubScore,
    pub role: SubScore,
    pub account: SubScore,
    pub freshness: SubScore,
    pub geo: SubScore,
    pub external: SubScore,
}

impl ScoreCard {
    /// Numeric scores, reasons dropped.
    pub fn scores(&self) -> DimensionScores {
        DimensionScores {
            email: self.email.score,
            role: self.role.score,
            account: self.account.score,
            freshness: self.freshness.score,
            geo: self.geo.score,
            external: self.external.score,
        }
    }

    /// All six reasons joined by single spaces, in dimension order.
    pub fn explanation(&self) -> String {
        [
            self.email.reason.as_str(),
            self.role.reason.as_str(),
            self.account.reason.as_str(),
            self.freshness.reason.as_str(),
            self.geo.reason.as_str(),
            self.external.reason.as_str(),
        ]
        .join(" ")
    }
}

/// Vendor-alignment delta beyond which a claim is materially off. The
/// boundary is exclusive: a delta of exactly 15 stays Aligned.
const ALIGNMENT_TOLERANCE: f64 = 15.0;

/// Bottom of the High confidence band.
const HIGH_BAND_FLOOR: u8 = 80;
/// Bottom of the Medium confidence band.
const MEDIUM_BAND_FLOOR: u8 = 55;

#[derive(Debug, Clone)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    /// Builds an engine from an explicit weight table, rejecting invalid
    /// weights up front so scoring itself cannot fail.
    pub fn new(weights: ScoringWeights) -> Result<Self, AuditError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Computes the final score, confidence band, and vendor alignment for
    /// one record. The weighted sum rounds half-point totals to the nearest
    /// even integer.
    pub fn assess(&self, scores: DimensionScores, vendor_score: FieldState) -> Assessment {
        let w = &self.weights;
        let weighted = f64::from(scores.email) * w.email
            + f64::from(scores.role) * w.role
            + f64::from(scores.account) * w.account
            + f64::from(scores.freshness) * w.freshness
            + f64::from(scores.geo) * w.geo
            + f64::from(scores.external) * w.external;
        let final_score = weighted.round_ties_even().clamp(0.0, 100.0) as u8;

        let band = if final_score >= HIGH_BAND_FLOOR {
            ConfidenceBand::High
        } else if final_score >= MEDIUM_BAND_FLOOR {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        };

        let alignment = self.audit_vendor_claim(final_score, vendor_score);

        Assessment {
            final_score,
            band,
            alignment,
        }
    }

    /// Audits the self-reported vendor score against the computed score.
    ///
    /// An absent, blank, or textual-NaN claim makes no assertion and stays
    /// Aligned; corrupted non-numeric text degrades to Unknown rather than
    /// aborting the record.
    fn audit_vendor_claim(&self, final_score: u8, vendor_score: FieldState) -> VendorAlignment {
        let FieldState::Present(raw) = vendor_score else {
            return VendorAlignment::Aligned;
        };
        if raw.eq_ignore_ascii_case("nan") {
            return VendorAlignment::Aligned;
        }

        match raw.parse::<f64>() {
            Ok(claimed) => {
                let delta = claimed - f64::from(final_score);
                if delta > ALIGNMENT_TOLERANCE {
                    VendorAlignment::Overstated
                } else if delta < -ALIGNMENT_TOLERANCE {
                    VendorAlignment::Understated
                } else {
                    VendorAlignment::Aligned
                }
            }
            Err(_) => VendorAlignment::Unknown,
        }
    }
}
