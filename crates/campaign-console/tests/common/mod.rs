#![allow(dead_code)]

use async_trait::async_trait;
use campaign_client::{CampaignService, Notification, Notifier, RequestError};
use campaign_types::{
    Campaign, CampaignDraft, CampaignId, CampaignPatch, CampaignStatus, LinkedInProfile,
};
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Requests seen by [`FakeCampaignService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(CampaignId),
    Create(CampaignDraft),
    Update(CampaignId, CampaignPatch),
    Delete(CampaignId),
    Generate(LinkedInProfile),
}

/// In-memory stand-in for the HTTP service, including the client's
/// failure notification.
pub struct FakeCampaignService {
    campaigns: Mutex<Vec<Campaign>>,
    next_id: Mutex<u32>,
    calls: Mutex<Vec<Call>>,
    fail_next: Mutex<Option<RequestError>>,
    reply: Mutex<String>,
    list_gate: Mutex<Option<Arc<Semaphore>>>,
    notifier: Arc<dyn Notifier>,
}

impl FakeCampaignService {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            campaigns: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            calls: Mutex::new(Vec::new()),
            fail_next: Mutex::new(None),
            reply: Mutex::new(String::new()),
            list_gate: Mutex::new(None),
            notifier,
        }
    }

    pub fn seed(&self, name: &str, status: CampaignStatus) -> Campaign {
        let campaign = self.insert(&CampaignDraft::new(name, format!("{} description", name), status));
        self.calls.lock().clear();
        campaign
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn stored(&self) -> Vec<Campaign> {
        self.campaigns.lock().clone()
    }

    pub fn fail_next(&self, error: RequestError) {
        *self.fail_next.lock() = Some(error);
    }

    pub fn reply_with(&self, message: &str) {
        *self.reply.lock() = message.to_string();
    }

    /// Make the next list calls wait for a permit.
    pub fn gate_list(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *self.list_gate.lock() = Some(gate.clone());
        gate
    }

    fn record(&self, call: Call) -> Result<(), RequestError> {
        self.calls.lock().push(call);
        match self.fail_next.lock().take() {
            Some(error) => {
                self.notifier.notify(Notification::error(error.message()));
                Err(error)
            }
            None => Ok(()),
        }
    }

    fn insert(&self, draft: &CampaignDraft) -> Campaign {
        let mut next_id = self.next_id.lock();
        let now = Utc::now();
        let campaign = Campaign {
            id: CampaignId::from(format!("c{}", *next_id)),
            name: draft.name.clone(),
            description: draft.description.clone(),
            status: draft.status,
            created_at: now,
            updated_at: now,
        };
        *next_id += 1;
        self.campaigns.lock().push(campaign.clone());
        campaign
    }

    fn not_found() -> RequestError {
        RequestError::Status { status: 404, message: "Campaign not found".to_string() }
    }
}

#[async_trait]
impl CampaignService for FakeCampaignService {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, RequestError> {
        let gate = self.list_gate.lock().clone();
        if let Some(gate) = gate {
            gate.acquire().await.expect("gate stays open").forget();
        }
        self.record(Call::List)?;
        Ok(self.stored())
    }

    async fn get_campaign(&self, id: &CampaignId) -> Result<Campaign, RequestError> {
        self.record(Call::Get(id.clone()))?;
        self.stored().into_iter().find(|c| &c.id == id).ok_or_else(Self::not_found)
    }

    async fn create_campaign(&self, draft: &CampaignDraft) -> Result<Campaign, RequestError> {
        self.record(Call::Create(draft.clone()))?;
        Ok(self.insert(draft))
    }

    async fn update_campaign(
        &self,
        id: &CampaignId,
        patch: &CampaignPatch,
    ) -> Result<Campaign, RequestError> {
        self.record(Call::Update(id.clone(), patch.clone()))?;
        let mut campaigns = self.campaigns.lock();
        let campaign = campaigns.iter_mut().find(|c| &c.id == id).ok_or_else(Self::not_found)?;
        if let Some(name) = &patch.name {
            campaign.name = name.clone();
        }
        if let Some(description) = &patch.description {
            campaign.description = description.clone();
        }
        if let Some(status) = patch.status {
            campaign.status = status;
        }
        campaign.updated_at = Utc::now();
        Ok(campaign.clone())
    }

    async fn delete_campaign(&self, id: &CampaignId) -> Result<(), RequestError> {
        self.record(Call::Delete(id.clone()))?;
        self.campaigns.lock().retain(|c| &c.id != id);
        Ok(())
    }

    async fn generate_message(&self, profile: &LinkedInProfile) -> Result<String, RequestError> {
        self.record(Call::Generate(profile.clone()))?;
        Ok(self.reply.lock().clone())
    }
}
