//! The Bio Request — the five form fields and their validation rule.

use serde::{Deserialize, Serialize};

/// The transient form payload. Wire names are camelCase, matching the JSON
/// body the page submits. Missing fields default to empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BioRequest {
    pub industry: String,
    pub job_title: String,
    pub skills: String,
    pub achievements: String,
    pub objectives: String,
}

/// One failed field with its user-facing message, keyed by wire name so the
/// page can place it next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl BioRequest {
    /// `industry` and `jobTitle` are required; the remaining three fields are
    /// free-form and may be empty.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.industry.is_empty() {
            errors.push(FieldError {
                field: "industry",
                message: "Industry is required",
            });
        }
        if self.job_title.is_empty() {
            errors.push(FieldError {
                field: "jobTitle",
                message: "Job title is required",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
