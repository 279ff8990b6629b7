#![allow(dead_code)]

use campaign_client::{
    ApiClient, ClientConfig, HttpCampaignService, Notification, NotificationLevel, Notifier,
};
use parking_lot::Mutex;
use std::sync::Arc;
use wiremock::MockServer;

/// Notifier that keeps everything it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.seen.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.seen
            .lock()
            .iter()
            .filter(|n| n.level == NotificationLevel::Error)
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().push(notification);
    }
}

pub fn client_for(base_url: &str, notifier: Arc<RecordingNotifier>) -> ApiClient {
    let config = ClientConfig::new(base_url).expect("mock server uri is a valid base url");
    ApiClient::new(config, notifier).expect("http client builds")
}

pub fn service_for(server: &MockServer) -> (HttpCampaignService, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let api = client_for(&format!("{}/api", server.uri()), notifier.clone());
    (HttpCampaignService::new(api), notifier)
}

pub fn campaign_json(id: &str, name: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": format!("{} description", name),
        "status": status,
        "createdAt": "2024-03-01T10:00:00Z",
        "updatedAt": "2024-03-01T10:00:00Z"
    })
}
