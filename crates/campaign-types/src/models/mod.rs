//! Core domain models for the Campaign Console.
//!
//! This module contains the data structures exchanged with the REST API.

mod campaign;
mod envelope;
mod profile;

pub use campaign::{Campaign, CampaignDraft, CampaignId, CampaignPatch, CampaignStatus};
pub use envelope::{ApiResponse, GeneratedMessage};
pub use profile::{LinkedInProfile, ProfileField};
