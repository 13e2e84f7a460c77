//! Account validators: organizational hierarchy, data freshness, and
//! geographic alignment of a single record. All checks are stateless.

use crate::record::FieldState;
use crate::validators::SubScore;

#[derive(Debug, Default)]
pub struct AccountValidator;

impl AccountValidator {
    pub fn new() -> Self {
        Self
    }

    /// Scores the parenting-level label. Only the two verified labels are
    /// recognized exactly; anything else is a neutral single entity.
    pub fn check_hierarchy(&self, parenting_level: FieldState) -> SubScore {
        match parenting_level {
            FieldState::Present("Top Parent") => {
                SubScore::new(100, "Signal: Verified Ultimate Parent entity.")
            }
            FieldState::Present("Child") => {
                SubScore::new(90, "Signal: Verified Subsidiary entity.")
            }
            _ => SubScore::new(70, "Neutral: Single entity mapping."),
        }
    }

    /// Scores data freshness from the notice-provided date. The phone number
    /// is accepted as a documented pass-through and does not affect the
    /// score.
    pub fn check_freshness(&self, notice_date: FieldState, _phone: FieldState) -> SubScore {
        if notice_date.is_present() {
            SubScore::new(100, "Signal: Data is fresh with contact details.")
        } else {
            SubScore::new(50, "Caution: Missing notice date; data may be stale.")
        }
    }

    /// Compares person and company state, case-insensitively.
    pub fn check_geography(&self, person_state: FieldState, company_state: FieldState) -> SubScore {
        let (FieldState::Present(person), FieldState::Present(company)) =
            (person_state, company_state)
        else {
            return SubScore::new(60, "Neutral: Incomplete geo-data for comparison.");
        };

        if person.eq_ignore_ascii_case(company) {
            SubScore::new(
                100,
                format!("Signal: Contact location ({}) aligns with HQ.", person),
            )
        } else {
            SubScore::new(
                70,
                format!("Caution: Contact in {}, but HQ is in {}.", person, company),
            )
        }
    }
}
