//! LinkedIn profile used as input for message generation.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Ephemeral description of a person; never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct LinkedInProfile {
    /// Full name (required)
    #[validate(length(min = 1))]
    pub name: String,
    /// Current job title (required)
    #[validate(length(min = 1))]
    pub job_title: String,
    /// Current company
    #[serde(default)]
    pub company: String,
    /// Location
    #[serde(default)]
    pub location: String,
    /// Free-text summary
    #[serde(default)]
    pub summary: String,
}

/// Addressable field of a [`LinkedInProfile`] form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    /// `name`
    Name,
    /// `job_title`
    JobTitle,
    /// `company`
    Company,
    /// `location`
    Location,
    /// `summary`
    Summary,
}

impl LinkedInProfile {
    /// Reject profiles without a name or job title.
    pub fn validate_required(&self) -> Result<(), ValidationError> {
        self.validate().map_err(ValidationError::from)
    }

    /// Current value of a field.
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::JobTitle => &self.job_title,
            ProfileField::Company => &self.company,
            ProfileField::Location => &self.location,
            ProfileField::Summary => &self.summary,
        }
    }

    /// Replace the value of a field.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::JobTitle => &mut self.job_title,
            ProfileField::Company => &mut self.company,
            ProfileField::Location => &mut self.location,
            ProfileField::Summary => &mut self.summary,
        };
        *slot = value.into();
    }
}
