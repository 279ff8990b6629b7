//! Campaign management screen.
//!
//! Rows move through `idle -> editing -> (saved | cancelled)` via the form and
//! `idle -> confirming-delete -> (deleted | cancelled)` via the delete flow.
//! Only one campaign can await delete confirmation at a time.

use crate::error::ConsoleError;
use campaign_client::{CampaignService, Notification, Notifier};
use campaign_types::{Campaign, CampaignDraft, CampaignId, CampaignPatch};
use std::sync::Arc;
use tokio::sync::watch;

/// Create/edit form. Present in [`CampaignListState::form`] while open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CampaignForm {
    /// Campaign being edited; `None` when creating
    pub editing: Option<Campaign>,
    /// Current input
    pub draft: CampaignDraft,
    /// A submission is in flight
    pub is_submitting: bool,
}

impl CampaignForm {
    fn create() -> Self {
        Self::default()
    }

    fn edit(campaign: &Campaign) -> Self {
        Self { editing: Some(campaign.clone()), draft: campaign.to_draft(), is_submitting: false }
    }

    pub const fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub const fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Campaign"
        } else {
            "Create New Campaign"
        }
    }

    pub const fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Update"
        } else {
            "Create"
        }
    }
}

/// Everything the campaign screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignListState {
    /// Last successfully loaded list
    pub campaigns: Vec<Campaign>,
    /// A list load is in flight
    pub is_loading: bool,
    /// Campaign awaiting delete confirmation
    pub pending_delete: Option<CampaignId>,
    /// Open create/edit form
    pub form: Option<CampaignForm>,
}

impl Default for CampaignListState {
    fn default() -> Self {
        Self { campaigns: Vec::new(), is_loading: true, pending_delete: None, form: None }
    }
}

/// What the list area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView<'a> {
    Loading,
    Empty,
    Populated(&'a [Campaign]),
}

impl CampaignListState {
    pub fn view(&self) -> ListView<'_> {
        if self.is_loading {
            ListView::Loading
        } else if self.campaigns.is_empty() {
            ListView::Empty
        } else {
            ListView::Populated(&self.campaigns)
        }
    }

    /// Whether `id` is the row showing confirm/cancel delete buttons.
    pub fn is_confirming_delete(&self, id: &CampaignId) -> bool {
        self.pending_delete.as_ref() == Some(id)
    }
}

/// State and actions of the campaign management screen.
pub struct CampaignListViewModel {
    service: Arc<dyn CampaignService>,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<CampaignListState>,
}

impl CampaignListViewModel {
    pub fn new(service: Arc<dyn CampaignService>, notifier: Arc<dyn Notifier>) -> Self {
        let (state, _) = watch::channel(CampaignListState::default());
        Self { service, notifier, state }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CampaignListState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<CampaignListState> {
        self.state.subscribe()
    }

    /// Initial load when the screen is shown.
    pub async fn mount(&self) -> Result<(), ConsoleError> {
        self.load().await
    }

    /// Replace the list with the server's. On failure the previous list stays.
    pub async fn load(&self) -> Result<(), ConsoleError> {
        self.state.send_modify(|s| s.is_loading = true);
        let result = self.service.list_campaigns().await;
        self.state.send_modify(|s| {
            s.is_loading = false;
            if let Ok(campaigns) = &result {
                s.campaigns = campaigns.clone();
            }
        });
        match result {
            Ok(campaigns) => {
                tracing::debug!("Loaded {} campaigns", campaigns.len());
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Reload after a successful write. A failed reload was already reported.
    async fn reload(&self) {
        if let Err(e) = self.load().await {
            tracing::debug!("Reload after write failed: {}", e);
        }
    }

    /// Flip `active`/`inactive` on the server, then reload.
    ///
    /// Deleted campaigns are left alone and no request is made.
    pub async fn toggle_status(&self, campaign: &Campaign) -> Result<(), ConsoleError> {
        let Some(next) = campaign.status.toggled() else {
            tracing::debug!("Not toggling {}: status is {}", campaign.id, campaign.status);
            return Ok(());
        };
        self.service.update_campaign(&campaign.id, &CampaignPatch::status(next)).await?;
        self.notifier.notify(Notification::success(format!("Campaign marked as {}", next)));
        self.reload().await;
        Ok(())
    }

    pub fn open_create(&self) {
        self.state.send_modify(|s| s.form = Some(CampaignForm::create()));
    }

    pub fn open_edit(&self, campaign: &Campaign) {
        self.state.send_modify(|s| s.form = Some(CampaignForm::edit(campaign)));
    }

    /// Change the form input. No-op when the form is closed.
    pub fn edit_form(&self, edit: impl FnOnce(&mut CampaignDraft)) {
        self.state.send_modify(|s| {
            if let Some(form) = s.form.as_mut() {
                edit(&mut form.draft);
            }
        });
    }

    pub fn cancel_form(&self) {
        self.state.send_modify(|s| s.form = None);
    }

    /// Create or update from the open form.
    ///
    /// On success the form closes and the list reloads. On failure the form
    /// stays open with its input.
    pub async fn submit_form(&self) -> Result<(), ConsoleError> {
        let form = self.state.borrow().form.clone();
        let Some(form) = form else {
            return Ok(());
        };
        if let Err(e) = form.draft.validate_required() {
            self.notifier.notify(Notification::error(e.to_string()));
            return Err(e.into());
        }

        self.set_submitting(true);
        let result = match &form.editing {
            Some(campaign) => self
                .service
                .update_campaign(&campaign.id, &CampaignPatch::from(&form.draft))
                .await
                .map(|_| "Campaign updated successfully"),
            None => self
                .service
                .create_campaign(&form.draft)
                .await
                .map(|_| "Campaign created successfully"),
        };

        match result {
            Ok(message) => {
                self.notifier.notify(Notification::success(message));
                self.state.send_modify(|s| s.form = None);
                self.reload().await;
                Ok(())
            }
            Err(e) => {
                self.set_submitting(false);
                Err(e.into())
            }
        }
    }

    fn set_submitting(&self, submitting: bool) {
        self.state.send_modify(|s| {
            if let Some(form) = s.form.as_mut() {
                form.is_submitting = submitting;
            }
        });
    }

    /// Mark a campaign as awaiting delete confirmation, replacing any other.
    pub fn request_delete(&self, id: CampaignId) {
        self.state.send_modify(|s| s.pending_delete = Some(id));
    }

    pub fn cancel_delete(&self) {
        self.state.send_modify(|s| s.pending_delete = None);
    }

    /// Delete the campaign awaiting confirmation, then reload.
    ///
    /// Does nothing when no campaign is pending. On failure the pending
    /// marker stays so the user can confirm again.
    pub async fn confirm_delete(&self) -> Result<(), ConsoleError> {
        let pending = self.state.borrow().pending_delete.clone();
        let Some(id) = pending else {
            return Ok(());
        };
        self.service.delete_campaign(&id).await?;
        self.notifier.notify(Notification::success("Campaign deleted successfully"));
        self.state.send_modify(|s| {
            if s.pending_delete.as_ref() == Some(&id) {
                s.pending_delete = None;
            }
        });
        self.reload().await;
        Ok(())
    }
}
