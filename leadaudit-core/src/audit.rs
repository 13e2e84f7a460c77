//! Batch orchestrator.
//!
//! For each active record, in input order: run all six validators, assemble
//! the score card, assess it with the record's vendor-reported score, and
//! emit one [`AuditResult`]. The ordered result sequence is the sole
//! externally visible output of a run; record-level problems are absorbed
//! into scores and reasons and never abort the batch.

use log::{debug, info};
use serde::Serialize;

use crate::config::AuditConfig;
use crate::engine::{ScoreCard, ScoringEngine};
use crate::errors::AuditError;
use crate::probe::UrlProber;
use crate::record::{FieldState, LeadRecord};
use crate::validators::{AccountValidator, IdentityValidator};

/// Placeholder when the record carries no company name.
const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Per-record output of the audit, serialized into the result artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditResult {
    #[serde(rename = "Record_Row")]
    pub record_row: u64,
    #[serde(rename = "Contact_Name")]
    pub contact_name: String,
    #[serde(rename = "Company_Name")]
    pub company_name: String,
    #[serde(rename = "Accuracy_Score")]
    pub accuracy_score: String,
    #[serde(rename = "Confidence_Band")]
    pub confidence_band: crate::engine::ConfidenceBand,
    #[serde(rename = "Vendor_Alignment")]
    pub vendor_alignment: crate::engine::VendorAlignment,
    #[serde(rename = "Explanation")]
    pub explanation: String,
}

/// Runs the full scoring pipeline over a batch of records.
pub struct Auditor {
    identity: IdentityValidator,
    account: AccountValidator,
    engine: ScoringEngine,
    prober: Box<dyn UrlProber>,
}

impl Auditor {
    /// Builds the auditor from explicit configuration and an injected URL
    /// prober. Fails only on invalid configuration.
    pub fn new(config: &AuditConfig, prober: Box<dyn UrlProber>) -> Result<Self, AuditError> {
        Ok(Self {
            identity: IdentityValidator::new(&config.identity)?,
            account: AccountValidator::new(),
            engine: ScoringEngine::new(config.weights)?,
            prober,
        })
    }

    /// Audits every active record, preserving input order. Inactive rows
    /// (First Name, Last Name, and Job Title all missing) are dropped.
    pub fn run(&self, records: &[LeadRecord]) -> Vec<AuditResult> {
        let active: Vec<&LeadRecord> = records.iter().filter(|r| r.is_active()).collect();
        info!("Active records identified: {}", active.len());

        active.iter().map(|record| self.audit_record(record)).collect()
    }

    fn audit_record(&self, record: &LeadRecord) -> AuditResult {
        let card = ScoreCard {
            email: self.identity.check_email(
                FieldState::of(&record.supplemental_email),
                FieldState::of(&record.website),
            ),
            role: self.identity.check_role(
                FieldState::of(&record.job_title),
                FieldState::of(&record.department),
            ),
            account: self
                .account
                .check_hierarchy(FieldState::of(&record.parenting_level)),
            freshness: self.account.check_freshness(
                FieldState::of(&record.notice_provided_date),
                FieldState::of(&record.direct_phone_number),
            ),
            geo: self.account.check_geography(
                FieldState::of(&record.person_state),
                FieldState::of(&record.company_state),
            ),
            external: self.identity.check_external(
                FieldState::of(&record.website),
                FieldState::of(&record.linkedin_url),
                self.prober.as_ref(),
            ),
        };

        let assessment = self
            .engine
            .assess(card.scores(), FieldState::of(&record.contact_accuracy_score));

        debug!(
            "Row {}: score {}/100, band {}, alignment {}",
            record.row_number, assessment.final_score, assessment.band, assessment.alignment
        );

        let company_name = match FieldState::of(&record.company_name) {
            FieldState::Present(name) => name.to_string(),
            _ => UNKNOWN_COMPANY.to_string(),
        };

        AuditResult {
            record_row: record.row_number,
            contact_name: record.contact_name(),
            company_name,
            accuracy_score: format!("{}/100", assessment.final_score),
            confidence_band: assessment.band,
            vendor_alignment: assessment.alignment,
            explanation: card.explanation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::{ProbeOutcome, UrlProber};

    struct NoNetworkProber;

    impl UrlProber for NoNetworkProber {
        fn probe(&self, _url: &str) -> ProbeOutcome {
            ProbeOutcome::Unreachable
        }
    }

    fn auditor() -> Auditor {
        Auditor::new(&AuditConfig::default(), Box::new(NoNetworkProber)).unwrap()
    }

    fn full_record() -> LeadRecord {
        LeadRecord {
            row_number: 2,
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            job_title: Some("VP of Sales".to_string()),
            department: Some("Sales".to_string()),
            supplemental_email: Some("jane@acme.com".to_string()),
            website: Some("acme.com".to_string()),
            linkedin_url: Some("linkedin.com/in/janedoe".to_string()),
            parenting_level: Some("Top Parent".to_string()),
            notice_provided_date: Some("2024-03-01".to_string()),
            direct_phone_number: Some("555-0100".to_string()),
            person_state: Some("CA".to_string()),
            company_state: Some("CA".to_string()),
            company_name: Some("Acme Corp".to_string()),
            contact_accuracy_score: Some("90".to_string()),
        }
    }

    #[test]
    fn test_audit_record_assembles_result() {
        let results = auditor().run(&[full_record()]);
        assert_eq!(results.len(), 1);

        let result = &results[0];
        assert_eq!(result.record_row, 2);
        assert_eq!(result.contact_name, "Jane Doe");
        assert_eq!(result.company_name, "Acme Corp");
        // email 100*.25 + role 100*.20 + account 100*.15 + freshness 100*.15
        // + geo 100*.15 + external 50*.10 = 95
        assert_eq!(result.accuracy_score, "95/100");
        assert_eq!(result.confidence_band, crate::engine::ConfidenceBand::High);
        assert_eq!(result.vendor_alignment, crate::engine::VendorAlignment::Aligned);
        assert!(result.explanation.contains("Risk: Website unreachable."));
    }

    #[test]
    fn test_inactive_rows_dropped_but_numbering_keeps_gaps() {
        let blank = LeadRecord {
            row_number: 3,
            ..LeadRecord::default()
        };
        let second = LeadRecord {
            row_number: 4,
            ..full_record()
        };

        let results = auditor().run(&[full_record(), blank, second]);
        let rows: Vec<u64> = results.iter().map(|r| r.record_row).collect();
        assert_eq!(rows, vec![2, 4]);
    }

    #[test]
    fn test_missing_company_name_gets_placeholder() {
        let mut record = full_record();
        record.company_name = None;
        let results = auditor().run(&[record]);
        assert_eq!(results[0].company_name, "Unknown Company");
    }

    #[test]
    fn test_empty_record_still_scores() {
        // Only a job title: everything else follows its blank/absent policy.
        let record = LeadRecord {
            row_number: 2,
            job_title: Some("Analyst".to_string()),
            ..LeadRecord::default()
        };
        let results = auditor().run(&[record]);
        let result = &results[0];

        // email 0*.25 + role 70*.20 + account 70*.15 + freshness 50*.15
        // + geo 60*.15 + external 0*.10 = 41
        assert_eq!(result.accuracy_score, "41/100");
        assert_eq!(result.confidence_band, crate::engine::ConfidenceBand::Low);
        assert_eq!(result.contact_name, "");
    }

    #[test]
    fn test_result_serializes_with_artifact_field_names() {
        let results = auditor().run(&[full_record()]);
        let json = serde_json::to_value(&results[0]).unwrap();

        assert_eq!(json["Record_Row"], 2);
        assert_eq!(json["Contact_Name"], "Jane Doe");
        assert_eq!(json["Accuracy_Score"], "95/100");
        assert_eq!(json["Confidence_Band"], "High");
        assert_eq!(json["Vendor_Alignment"], "Aligned");
        assert!(json["Explanation"].as_str().unwrap().starts_with("Signal:"));
    }
}
