//! Identity validators: email legitimacy, role/seniority signal, and
//! external presence (website + LinkedIn) of a single record.
//!
//! The validator is constructed from an [`IdentityConfig`]; seniority
//! patterns are compiled once at construction. The external-presence check
//! depends on an injected [`UrlProber`], never on the network directly.

use std::collections::HashSet;

use regex::Regex;

use crate::config::IdentityConfig;
use crate::errors::AuditError;
use crate::probe::{ProbeOutcome, UrlProber};
use crate::record::FieldState;
use crate::validators::SubScore;

/// Deduction when the email domain belongs to a personal provider.
const PERSONAL_PROVIDER_PENALTY: i32 = 60;
/// Deduction when the website is not a substring of the email domain.
const DOMAIN_MISMATCH_PENALTY: i32 = 40;

/// Seniority level assigned when no pattern matches.
const FALLBACK_LEVEL: &str = "Individual Contributor";

#[derive(Debug)]
pub struct IdentityValidator {
    personal_providers: HashSet<String>,
    seniority_patterns: Vec<(String, Regex)>,
}

impl IdentityValidator {
    /// Builds a validator from explicit configuration, compiling every
    /// seniority pattern up front.
    pub fn new(config: &IdentityConfig) -> Result<Self, AuditError> {
        let mut seniority_patterns = Vec::with_capacity(config.seniority_patterns.len());
        for entry in &config.seniority_patterns {
            let regex = Regex::new(&entry.pattern)
                .map_err(|e| AuditError::PatternCompilation(entry.level.clone(), e))?;
            seniority_patterns.push((entry.level.clone(), regex));
        }

        Ok(Self {
            personal_providers: config
                .personal_providers
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
            seniority_patterns,
        })
    }

    /// Checks email legitimacy against the personal-provider list and the
    /// record's own website domain.
    pub fn check_email(&self, email: FieldState, website: FieldState) -> SubScore {
        let FieldState::Present(email) = email else {
            return SubScore::new(0, "Risk: No email provided.");
        };

        let email = email.to_lowercase();
        let website = match website {
            FieldState::Present(site) => {
                let site = site.to_lowercase();
                let site = site.strip_prefix("www.").unwrap_or(&site);
                site.trim_end_matches('/').to_string()
            }
            _ => String::new(),
        };

        let domain = email.rsplit('@').next().unwrap_or(&email).to_string();
        let mut score: i32 = 100;
        let mut reasons = Vec::new();

        if self.personal_providers.contains(&domain) {
            score -= PERSONAL_PROVIDER_PENALTY;
            reasons.push("Personal email provider used.".to_string());
        }

        if !website.is_empty() && !domain.contains(&website) {
            score -= DOMAIN_MISMATCH_PENALTY;
            reasons.push(format!("Domain mismatch (@{} vs {}).", domain, website));
        }

        let reason = if reasons.is_empty() {
            "Signal: Professional corporate email.".to_string()
        } else {
            format!("Flags: {}", reasons.join(", "))
        };
        SubScore::new(score.max(0) as u8, reason)
    }

    /// Resolves the job title to a seniority level. First matching pattern
    /// wins; unmatched titles fall back to Individual Contributor at 70.
    pub fn check_role(&self, title: FieldState, department: FieldState) -> SubScore {
        let FieldState::Present(title) = title else {
            return SubScore::new(0, "Risk: Missing Job Title.");
        };

        let title_clean = title.to_lowercase();
        let department = match department {
            FieldState::Present(dept) => dept,
            _ => "Unknown",
        };

        for (level, regex) in &self.seniority_patterns {
            if regex.is_match(&title_clean) {
                return SubScore::new(
                    100,
                    format!("Signal: {} recognized as {} in {}.", title, level, department),
                );
            }
        }

        SubScore::new(
            70,
            format!(
                "Signal: {} recognized as {} in {}.",
                title, FALLBACK_LEVEL, department
            ),
        )
    }

    /// Checks external presence: website reachability and LinkedIn profile,
    /// each worth up to 50 points. Both signals are always reported.
    pub fn check_external(
        &self,
        website: FieldState,
        linkedin_url: FieldState,
        prober: &dyn UrlProber,
    ) -> SubScore {
        let mut score: u8 = 0;
        let mut reasons = Vec::new();

        match website {
            FieldState::Present(site) => {
                let url = if site.starts_with("http") {
                    site.to_string()
                } else {
                    format!("https://{}", site)
                };
                match prober.probe(&url) {
                    ProbeOutcome::Reachable(200) => {
                        score += 50;
                        reasons.push("Signal: Website is active.".to_string());
                    }
                    ProbeOutcome::Reachable(status) => {
                        reasons.push(format!("Risk: Website error {}.", status));
                    }
                    ProbeOutcome::Unreachable => {
                        reasons.push("Risk: Website unreachable.".to_string());
                    }
                }
            }
            _ => reasons.push("Risk: No website provided.".to_string()),
        }

        if linkedin_url.is_present() {
            score += 50;
            reasons.push("Signal: LinkedIn profile provided.".to_string());
        } else {
            reasons.push("Risk: No LinkedIn data available in record.".to_string());
        }

        SubScore::new(score, reasons.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Canned prober for exercising the external check without a network.
    struct StaticProber(ProbeOutcome);

    impl UrlProber for StaticProber {
        fn probe(&self, _url: &str) -> ProbeOutcome {
            self.0
        }
    }

    fn validator() -> IdentityValidator {
        IdentityValidator::new(&IdentityConfig::default()).unwrap()
    }

    fn present(value: &str) -> FieldState<'_> {
        FieldState::Present(value)
    }

    #[test]
    fn test_email_corporate_domain_scores_full() {
        let result = validator().check_email(present("jane@acme.com"), present("acme.com"));
        assert_eq!(result.score, 100);
        assert_eq!(result.reason, "Signal: Professional corporate email.");
    }

    #[test]
    fn test_email_missing_scores_zero() {
        let result = validator().check_email(FieldState::Absent, present("acme.com"));
        assert_eq!(result.score, 0);
        assert_eq!(result.reason, "Risk: No email provided.");

        let blank = validator().check_email(FieldState::Blank, FieldState::Absent);
        assert_eq!(blank.score, 0);
    }

    #[test]
    fn test_email_personal_provider_flagged() {
        let result = validator().check_email(present("jane@gmail.com"), FieldState::Absent);
        assert_eq!(result.score, 40);
        assert!(result.reason.contains("Personal email provider used."));
    }

    #[test]
    fn test_email_personal_provider_and_mismatch_floors_at_zero() {
        let result = validator().check_email(present("jane@gmail.com"), present("acme.com"));
        assert_eq!(result.score, 0);
        assert!(result.reason.starts_with("Flags:"));
        assert!(result.reason.contains("Personal email provider used."));
        assert!(result.reason.contains("Domain mismatch (@gmail.com vs acme.com)."));
    }

    #[test]
    fn test_email_website_normalization() {
        // www. prefix and trailing slash are stripped before comparison.
        let result = validator().check_email(present("jane@acme.com"), present("www.acme.com/"));
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_role_executive_title() {
        let result = validator().check_role(present("VP of Sales"), present("Sales"));
        assert_eq!(result.score, 100);
        assert_eq!(
            result.reason,
            "Signal: VP of Sales recognized as Executive in Sales."
        );
    }

    #[test]
    fn test_role_first_match_wins() {
        // "Director" outranks the "lead" fragment in Manager patterns.
        let result = validator().check_role(present("Director of Lead Generation"), FieldState::Absent);
        assert!(result.reason.contains("recognized as Director in Unknown."));
    }

    #[test]
    fn test_role_unmatched_title_is_individual_contributor() {
        let result = validator().check_role(present("Analyst"), FieldState::Absent);
        assert_eq!(result.score, 70);
        assert_eq!(
            result.reason,
            "Signal: Analyst recognized as Individual Contributor in Unknown."
        );
    }

    #[test]
    fn test_role_missing_title_scores_zero() {
        let result = validator().check_role(FieldState::Absent, present("Sales"));
        assert_eq!(result.score, 0);
        assert_eq!(result.reason, "Risk: Missing Job Title.");
    }

    #[test]
    fn test_external_active_site_and_linkedin() {
        let prober = StaticProber(ProbeOutcome::Reachable(200));
        let result = validator().check_external(
            present("acme.com"),
            present("linkedin.com/in/jane"),
            &prober,
        );
        assert_eq!(result.score, 100);
        assert_eq!(
            result.reason,
            "Signal: Website is active. | Signal: LinkedIn profile provided."
        );
    }

    #[test]
    fn test_external_error_status_reported_with_code() {
        let prober = StaticProber(ProbeOutcome::Reachable(404));
        let result = validator().check_external(present("acme.com"), FieldState::Absent, &prober);
        assert_eq!(result.score, 0);
        assert_eq!(
            result.reason,
            "Risk: Website error 404. | Risk: No LinkedIn data available in record."
        );
    }

    #[test]
    fn test_external_unreachable_site_still_reports_linkedin() {
        let prober = StaticProber(ProbeOutcome::Unreachable);
        let result = validator().check_external(
            present("acme.com"),
            present("linkedin.com/in/jane"),
            &prober,
        );
        assert_eq!(result.score, 50);
        assert_eq!(
            result.reason,
            "Risk: Website unreachable. | Signal: LinkedIn profile provided."
        );
    }

    #[test]
    fn test_external_no_website_skips_probe() {
        struct PanicProber;
        impl UrlProber for PanicProber {
            fn probe(&self, _url: &str) -> ProbeOutcome {
                panic!("probe must not run for a missing website");
            }
        }
        let result = validator().check_external(FieldState::Absent, FieldState::Blank, &PanicProber);
        assert_eq!(result.score, 0);
        assert_eq!(
            result.reason,
            "Risk: No website provided. | Risk: No LinkedIn data available in record."
        );
    }
}
