//! Required-field validation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a payload is missing required input.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ValidationError {
    /// One or more required fields are empty
    #[error("Required fields missing: {}", fields.join(", "))]
    RequiredFields {
        /// Names of the empty fields, sorted
        fields: Vec<String>,
    },

    /// Status that cannot be set through the campaign form
    #[error("Status '{status}' cannot be selected")]
    UnselectableStatus { status: String },
}

impl ValidationError {
    /// Names of the offending fields.
    pub fn fields(&self) -> &[String] {
        match self {
            Self::RequiredFields { fields } => fields,
            Self::UnselectableStatus { .. } => &[],
        }
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> =
            errors.field_errors().keys().map(|field| field.to_string()).collect();
        fields.sort();
        Self::RequiredFields { fields }
    }
}
