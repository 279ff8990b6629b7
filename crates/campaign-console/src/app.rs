//! Console shell: tab navigation around the two screens.

use crate::campaign_list::CampaignListViewModel;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::message_generator::MessageGeneratorViewModel;
use crate::toast::ToastCenter;
use campaign_client::{
    ApiClient, CampaignService, ClientConfig, ConfigError, HttpCampaignService, Notifier,
};
use std::sync::Arc;

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Management,
    Generator,
}

impl Tab {
    pub const ALL: [Self; 2] = [Self::Management, Self::Generator];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Management => "Campaign Management",
            Self::Generator => "Message Generator",
        }
    }
}

/// Owns the screens, the tab selection and the shared toast queue.
pub struct Console {
    toasts: Arc<ToastCenter>,
    campaigns: CampaignListViewModel,
    generator: MessageGeneratorViewModel,
    active_tab: Tab,
    mobile_menu_open: bool,
}

impl Console {
    /// Build from explicit collaborators. `toasts` should be the notifier the
    /// service's API client reports failures to.
    pub fn new(
        service: Arc<dyn CampaignService>,
        toasts: Arc<ToastCenter>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        let notifier: Arc<dyn Notifier> = toasts.clone();
        Self {
            campaigns: CampaignListViewModel::new(service.clone(), notifier.clone()),
            generator: MessageGeneratorViewModel::new(service, notifier, clipboard),
            toasts,
            active_tab: Tab::default(),
            mobile_menu_open: false,
        }
    }

    /// Wire the HTTP service from `CAMPAIGN_API_BASE_URL` and the system clipboard.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = ClientConfig::from_env()?;
        tracing::info!("Campaign API at {}", config.base_url);
        let toasts = Arc::new(ToastCenter::default());
        let api = ApiClient::new(config, toasts.clone())?;
        let service: Arc<dyn CampaignService> = Arc::new(HttpCampaignService::new(api));
        Ok(Self::new(service, toasts, Arc::new(SystemClipboard)))
    }

    /// Show the initial screen.
    pub async fn start(&self) {
        if self.active_tab == Tab::Management {
            // failures are already on the toast queue
            let _ = self.campaigns.mount().await;
        }
    }

    /// Switch screens and close the mobile menu. Entering the management
    /// screen reloads the campaign list.
    pub async fn select_tab(&mut self, tab: Tab) {
        let changed = self.active_tab != tab;
        self.active_tab = tab;
        self.mobile_menu_open = false;
        if changed && tab == Tab::Management {
            let _ = self.campaigns.mount().await;
        }
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub const fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub const fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub const fn campaigns(&self) -> &CampaignListViewModel {
        &self.campaigns
    }

    pub const fn generator(&self) -> &MessageGeneratorViewModel {
        &self.generator
    }

    pub fn toasts(&self) -> &ToastCenter {
        &self.toasts
    }
}
