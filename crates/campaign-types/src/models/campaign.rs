//! Campaign model and its create/update payloads.

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Server-assigned campaign identifier.
///
/// Opaque to the client: values come from API responses and are only echoed
/// back in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(String);

impl CampaignId {
    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CampaignId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CampaignId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Campaign lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    /// Campaign is running
    #[default]
    Active,
    /// Campaign is paused
    Inactive,
    /// Campaign was removed (soft delete, server-defined)
    Deleted,
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Deleted => write!(f, "deleted"),
        }
    }
}

impl CampaignStatus {
    /// Status after a toggle: `Active` and `Inactive` swap, `Deleted` has none.
    pub const fn toggled(self) -> Option<Self> {
        match self {
            Self::Active => Some(Self::Inactive),
            Self::Inactive => Some(Self::Active),
            Self::Deleted => None,
        }
    }

    /// Whether the status can be chosen in the campaign form.
    pub const fn is_selectable(self) -> bool {
        matches!(self, Self::Active | Self::Inactive)
    }
}

/// Campaign record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    /// Unique identifier, assigned by the server
    pub id: CampaignId,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Current lifecycle status
    pub status: CampaignStatus,
    /// Creation time, assigned by the server
    pub created_at: DateTime<Utc>,
    /// Last modification time, assigned by the server
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    /// Editable fields of this campaign, used to prefill the edit form.
    pub fn to_draft(&self) -> CampaignDraft {
        CampaignDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }
}

/// Payload for creating a campaign. Also backs the create/edit form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CampaignDraft {
    /// Display name (required)
    #[validate(length(min = 1))]
    pub name: String,
    /// Free-text description (required)
    #[validate(length(min = 1))]
    pub description: String,
    /// Initial status
    pub status: CampaignStatus,
}

impl CampaignDraft {
    /// Create a draft with the given fields.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        status: CampaignStatus,
    ) -> Self {
        Self { name: name.into(), description: description.into(), status }
    }

    /// Reject drafts with an empty name or description, then drafts whose
    /// status cannot be chosen in the form.
    pub fn validate_required(&self) -> Result<(), ValidationError> {
        self.validate().map_err(ValidationError::from)?;
        if !self.status.is_selectable() {
            return Err(ValidationError::UnselectableStatus { status: self.status.to_string() });
        }
        Ok(())
    }
}

/// Partial update payload. Absent fields are left unchanged by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CampaignPatch {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
}

impl CampaignPatch {
    /// Patch that only changes the status.
    pub const fn status(status: CampaignStatus) -> Self {
        Self { name: None, description: None, status: Some(status) }
    }

    /// Whether the patch changes nothing.
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.status.is_none()
    }
}

impl From<&CampaignDraft> for CampaignPatch {
    fn from(draft: &CampaignDraft) -> Self {
        Self {
            name: Some(draft.name.clone()),
            description: Some(draft.description.clone()),
            status: Some(draft.status),
        }
    }
}
