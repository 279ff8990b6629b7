//! # Campaign Types
//!
//! Core types, models, and error definitions for the Campaign Console.
//!
//! - **`error`** - Local validation errors raised before any request is sent
//! - **`models`** - Domain models (Campaign, LinkedInProfile) and the API envelope
//!
//! ## Architecture Role
//!
//! `campaign-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!         campaign-types (this crate)
//!                 │
//!                 ▼
//!         campaign-client
//!                 │
//!                 ▼
//!         campaign-console
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde for the REST API
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

pub use error::ValidationError;

pub use models::{
    ApiResponse, Campaign, CampaignDraft, CampaignId, CampaignPatch, CampaignStatus,
    GeneratedMessage, LinkedInProfile, ProfileField,
};
