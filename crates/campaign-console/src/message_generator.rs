//! Message generator screen.

use crate::clipboard::Clipboard;
use crate::error::ConsoleError;
use campaign_client::{CampaignService, Notification, Notifier};
use campaign_types::{LinkedInProfile, ProfileField};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratorState {
    /// Profile being filled in
    pub profile: LinkedInProfile,
    /// Last generated message, possibly edited locally; empty when none
    pub generated_message: String,
    /// A generation request is in flight. Renderers disable submit while set.
    pub is_generating: bool,
}

/// What the result panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorView<'a> {
    /// Nothing generated yet
    Placeholder,
    /// First generation in flight
    Generating,
    /// Editable result
    Message(&'a str),
}

impl GeneratorState {
    pub fn view(&self) -> GeneratorView<'_> {
        if !self.generated_message.is_empty() {
            GeneratorView::Message(&self.generated_message)
        } else if self.is_generating {
            GeneratorView::Generating
        } else {
            GeneratorView::Placeholder
        }
    }

    /// Length of the displayed message in characters.
    pub fn character_count(&self) -> usize {
        self.generated_message.chars().count()
    }
}

/// State and actions of the message generator screen.
pub struct MessageGeneratorViewModel {
    service: Arc<dyn CampaignService>,
    notifier: Arc<dyn Notifier>,
    clipboard: Arc<dyn Clipboard>,
    state: watch::Sender<GeneratorState>,
}

impl MessageGeneratorViewModel {
    pub fn new(
        service: Arc<dyn CampaignService>,
        notifier: Arc<dyn Notifier>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        let (state, _) = watch::channel(GeneratorState::default());
        Self { service, notifier, clipboard, state }
    }

    pub fn state(&self) -> GeneratorState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GeneratorState> {
        self.state.subscribe()
    }

    pub fn set_field(&self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|s| s.profile.set_field(field, value));
    }

    /// Request a message for the current profile.
    ///
    /// Name and job title must be filled in; otherwise nothing is sent. A
    /// successful response replaces the displayed message, a failed one
    /// keeps it.
    pub async fn generate(&self) -> Result<(), ConsoleError> {
        let profile = self.state.borrow().profile.clone();
        if let Err(e) = profile.validate_required() {
            self.notifier.notify(Notification::error(e.to_string()));
            return Err(e.into());
        }

        self.state.send_modify(|s| s.is_generating = true);
        let result = self.service.generate_message(&profile).await;
        self.state.send_modify(|s| {
            s.is_generating = false;
            if let Ok(message) = &result {
                s.generated_message = message.clone();
            }
        });
        result.map(|_| ()).map_err(ConsoleError::from)
    }

    /// Local edit of the displayed message. Never sent to the server.
    pub fn edit_message(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_modify(|s| s.generated_message = text);
    }

    /// Forget the displayed message. The profile is kept.
    pub fn clear_message(&self) {
        self.state.send_modify(|s| s.generated_message.clear());
    }

    /// Copy the displayed message to the clipboard (best effort).
    pub fn copy_message(&self) {
        let text = self.state.borrow().generated_message.clone();
        if text.is_empty() {
            return;
        }
        if let Err(e) = self.clipboard.write_text(&text) {
            tracing::warn!("Copy to clipboard failed: {}", e);
        }
        self.notifier.notify(Notification::success("Copied to clipboard"));
    }
}
