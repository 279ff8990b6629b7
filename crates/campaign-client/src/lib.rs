//! # Campaign Client
//!
//! Typed access to the Campaign Console REST API.
//!
//! - [`ApiClient`] performs the HTTP calls against a configurable base URL,
//!   unwraps the `{ data, message }` envelope and reports every failure once
//!   through a [`Notifier`].
//! - [`CampaignService`] is the data-service seam used by the view-models;
//!   [`HttpCampaignService`] implements it over [`ApiClient`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use campaign_client::{ApiClient, CampaignService, ClientConfig, HttpCampaignService, TracingNotifier};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = ApiClient::new(ClientConfig::from_env()?, Arc::new(TracingNotifier))?;
//! let service = HttpCampaignService::new(api);
//! for campaign in service.list_campaigns().await? {
//!     println!("{} ({})", campaign.name, campaign.status);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod notify;
mod service;

pub use client::ApiClient;
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{ConfigError, RequestError, DEFAULT_ERROR_MESSAGE};
pub use notify::{Notification, NotificationLevel, Notifier, TracingNotifier};
pub use service::{CampaignService, HttpCampaignService, CAMPAIGNS_PATH, GENERATE_MESSAGE_PATH};
