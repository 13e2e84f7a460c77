//! Lead record model and CSV ingestion for `leadaudit-core`.
//!
//! Every input field is optional: a column may be missing from the file
//! entirely, present but blank, or carry a value. Validators never see raw
//! options; they pattern-match over the explicit [`FieldState`] tri-state,
//! which replaces ad hoc truthiness checks with an exhaustive policy per
//! field.

use std::path::Path;

use csv::StringRecord;
use log::{debug, info};

use crate::errors::AuditError;

/// Explicit tri-state view of an optional record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState<'a> {
    /// The column was not present in the input at all.
    Absent,
    /// The column exists but the cell is empty or whitespace.
    Blank,
    /// A trimmed, non-empty value.
    Present(&'a str),
}

impl<'a> FieldState<'a> {
    /// Classifies an optional field value.
    pub fn of(field: &'a Option<String>) -> Self {
        match field {
            None => FieldState::Absent,
            Some(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    FieldState::Blank
                } else {
                    FieldState::Present(trimmed)
                }
            }
        }
    }

    /// True only for a non-blank value.
    pub fn is_present(&self) -> bool {
        matches!(self, FieldState::Present(_))
    }
}

/// One input row of the lead table.
///
/// `None` means the column was missing from the file; `Some` may still hold
/// a blank cell. `row_number` is the original 1-based spreadsheet position
/// (first data row is row 2, after the header).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadRecord {
    pub row_number: u64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub supplemental_email: Option<String>,
    pub website: Option<String>,
    pub linkedin_url: Option<String>,
    pub parenting_level: Option<String>,
    pub notice_provided_date: Option<String>,
    pub direct_phone_number: Option<String>,
    pub person_state: Option<String>,
    pub company_state: Option<String>,
    pub company_name: Option<String>,
    pub contact_accuracy_score: Option<String>,
}

/// Looks up a cell by exact column name. `None` when the column does not
/// exist or the row is shorter than the header.
fn column(headers: &StringRecord, row: &StringRecord, name: &str) -> Option<String> {
    let index = headers.iter().position(|h| h == name)?;
    row.get(index).map(|value| value.to_string())
}

impl LeadRecord {
    /// Builds a record from one CSV row. `data_index` is the zero-based
    /// position among data rows, before any filtering.
    pub fn from_row(headers: &StringRecord, row: &StringRecord, data_index: usize) -> Self {
        Self {
            row_number: data_index as u64 + 2,
            first_name: column(headers, row, "First Name"),
            last_name: column(headers, row, "Last Name"),
            job_title: column(headers, row, "Job Title"),
            department: column(headers, row, "Department"),
            supplemental_email: column(headers, row, "Supplemental Email"),
            website: column(headers, row, "Website"),
            linkedin_url: column(headers, row, "LinkedIn URL"),
            parenting_level: column(headers, row, "Parenting Level"),
            notice_provided_date: column(headers, row, "Notice Provided Date"),
            direct_phone_number: column(headers, row, "Direct Phone Number"),
            person_state: column(headers, row, "Person State"),
            company_state: column(headers, row, "Company State"),
            company_name: column(headers, row, "Company Name"),
            contact_accuracy_score: column(headers, row, "Contact Accuracy Score"),
        }
    }

    /// A row is active when at least one of First Name, Last Name, or
    /// Job Title carries a value. Fully blank rows are dropped before
    /// scoring.
    pub fn is_active(&self) -> bool {
        FieldState::of(&self.first_name).is_present()
            || FieldState::of(&self.last_name).is_present()
            || FieldState::of(&self.job_title).is_present()
    }

    /// Concatenated contact name, skipping missing parts.
    pub fn contact_name(&self) -> String {
        let mut parts = Vec::new();
        if let FieldState::Present(first) = FieldState::of(&self.first_name) {
            parts.push(first);
        }
        if let FieldState::Present(last) = FieldState::of(&self.last_name) {
            parts.push(last);
        }
        parts.join(" ")
    }
}

/// Reads all data rows from a CSV file into [`LeadRecord`]s.
///
/// Rows keep their original positions; no filtering happens here. Short rows
/// are tolerated (missing trailing cells read as absent fields). A missing
/// file or unparseable table aborts the run with an error.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<LeadRecord>, AuditError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AuditError::InputNotFound(path.display().to_string()));
    }

    info!("Loading lead records from: {}", path.display());
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        records.push(LeadRecord::from_row(&headers, &row, index));
    }

    debug!("Read {} data rows from {}.", records.len(), path.display());
    Ok(records)
}
