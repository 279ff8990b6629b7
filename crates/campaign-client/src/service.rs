//! Campaign data service.

use crate::client::ApiClient;
use crate::error::RequestError;
use async_trait::async_trait;
use campaign_types::{
    Campaign, CampaignDraft, CampaignId, CampaignPatch, GeneratedMessage, LinkedInProfile,
};

/// Collection path for campaigns.
pub const CAMPAIGNS_PATH: &str = "/campaigns";

/// Message generation endpoint.
pub const GENERATE_MESSAGE_PATH: &str = "/personalized-message";

/// Typed operations on campaigns and message generation.
///
/// Implementations return the unwrapped `data` field of the envelope.
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// All campaigns. An empty list is a valid result.
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, RequestError>;

    /// One campaign; a missing id fails with a 404 [`RequestError`].
    async fn get_campaign(&self, id: &CampaignId) -> Result<Campaign, RequestError>;

    /// Create a campaign. Identity and timestamps come from the server.
    async fn create_campaign(&self, draft: &CampaignDraft) -> Result<Campaign, RequestError>;

    /// Apply a partial update. Fields absent from `patch` are left unchanged.
    async fn update_campaign(
        &self,
        id: &CampaignId,
        patch: &CampaignPatch,
    ) -> Result<Campaign, RequestError>;

    /// Delete a campaign. Whether this is a hard delete is up to the server.
    async fn delete_campaign(&self, id: &CampaignId) -> Result<(), RequestError>;

    /// Ask the server to write a personalized message for `profile`.
    async fn generate_message(&self, profile: &LinkedInProfile) -> Result<String, RequestError>;
}

/// [`CampaignService`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCampaignService {
    api: ApiClient,
}

impl HttpCampaignService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }
}

/// `/campaigns/{id}` with the id percent-encoded as a single path segment.
fn campaign_path(id: &CampaignId) -> String {
    // form encoding turns spaces into '+', which is literal in a path
    let segment: String = url::form_urlencoded::byte_serialize(id.as_str().as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("{}/{}", CAMPAIGNS_PATH, segment)
}

#[async_trait]
impl CampaignService for HttpCampaignService {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, RequestError> {
        Ok(self.api.get::<Vec<Campaign>>(CAMPAIGNS_PATH).await?.data)
    }

    async fn get_campaign(&self, id: &CampaignId) -> Result<Campaign, RequestError> {
        Ok(self.api.get::<Campaign>(&campaign_path(id)).await?.data)
    }

    async fn create_campaign(&self, draft: &CampaignDraft) -> Result<Campaign, RequestError> {
        Ok(self.api.post::<_, Campaign>(CAMPAIGNS_PATH, draft).await?.data)
    }

    async fn update_campaign(
        &self,
        id: &CampaignId,
        patch: &CampaignPatch,
    ) -> Result<Campaign, RequestError> {
        Ok(self.api.put::<_, Campaign>(&campaign_path(id), patch).await?.data)
    }

    async fn delete_campaign(&self, id: &CampaignId) -> Result<(), RequestError> {
        self.api.delete(&campaign_path(id)).await
    }

    async fn generate_message(&self, profile: &LinkedInProfile) -> Result<String, RequestError> {
        let resp = self.api.post::<_, GeneratedMessage>(GENERATE_MESSAGE_PATH, profile).await?;
        Ok(resp.data.message)
    }
}
