//! In-memory toast queue.

use campaign_client::{Notification, NotificationLevel, Notifier};
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

/// Where the renderer places toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPosition {
    #[default]
    TopCenter,
    TopRight,
    BottomCenter,
    BottomRight,
}

/// Display settings shared by all toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastConfig {
    /// How long a toast stays visible
    pub duration: Duration,
    /// Screen placement
    pub position: ToastPosition,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { duration: Duration::milliseconds(5000), position: ToastPosition::default() }
    }
}

/// A notification waiting to be displayed or dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Collects notifications from the API client and the view-models.
#[derive(Debug, Default)]
pub struct ToastCenter {
    config: ToastConfig,
    toasts: Mutex<Vec<Toast>>,
}

impl ToastCenter {
    pub fn new(config: ToastConfig) -> Self {
        Self { config, toasts: Mutex::new(Vec::new()) }
    }

    pub const fn config(&self) -> &ToastConfig {
        &self.config
    }

    fn is_live(&self, toast: &Toast, now: DateTime<Utc>) -> bool {
        toast.created_at + self.config.duration > now
    }

    /// Unexpired toasts in arrival order.
    pub fn toasts(&self) -> Vec<Toast> {
        let now = Utc::now();
        self.toasts.lock().iter().filter(|t| self.is_live(t, now)).cloned().collect()
    }

    /// Messages of the unexpired toasts with the given level, in arrival order.
    pub fn messages(&self, level: NotificationLevel) -> Vec<String> {
        let now = Utc::now();
        self.toasts
            .lock()
            .iter()
            .filter(|t| t.level == level && self.is_live(t, now))
            .map(|t| t.message.clone())
            .collect()
    }

    /// Remove one toast. Returns whether it was present.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut toasts = self.toasts.lock();
        let before = toasts.len();
        toasts.retain(|t| t.id != id);
        toasts.len() != before
    }

    /// Drop toasts older than the configured duration. Returns how many went.
    pub fn prune_expired(&self, now: DateTime<Utc>) -> usize {
        let mut toasts = self.toasts.lock();
        let before = toasts.len();
        toasts.retain(|t| self.is_live(t, now));
        before - toasts.len()
    }

    pub fn clear(&self) {
        self.toasts.lock().clear();
    }
}

impl Notifier for ToastCenter {
    /// Queue a toast after dropping expired ones.
    fn notify(&self, notification: Notification) {
        tracing::debug!("toast {:?}: {}", notification.level, notification.message);
        let now = Utc::now();
        let mut toasts = self.toasts.lock();
        toasts.retain(|t| self.is_live(t, now));
        toasts.push(Toast {
            id: Uuid::new_v4(),
            level: notification.level,
            message: notification.message,
            created_at: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_and_dismiss() {
        let center = ToastCenter::default();
        center.notify(Notification::success("Saved"));
        center.notify(Notification::error("Boom"));

        assert_eq!(center.messages(NotificationLevel::Error), vec!["Boom".to_string()]);
        let first = center.toasts()[0].id;
        assert!(center.dismiss(first));
        assert!(!center.dismiss(first));
        assert_eq!(center.toasts().len(), 1);

        center.clear();
        assert!(center.toasts().is_empty());
    }

    #[test]
    fn test_prune_uses_configured_duration() {
        let center = ToastCenter::default();
        assert_eq!(center.config().duration, Duration::milliseconds(5000));
        center.notify(Notification::info("hello"));

        let created = center.toasts()[0].created_at;
        assert_eq!(center.prune_expired(created + Duration::milliseconds(4999)), 0);
        assert_eq!(center.prune_expired(created + Duration::milliseconds(5000)), 1);
        assert!(center.toasts().is_empty());
    }

    #[test]
    fn test_expired_toasts_are_hidden_and_dropped_on_notify() {
        let center = ToastCenter::new(ToastConfig {
            duration: Duration::zero(),
            position: ToastPosition::TopCenter,
        });
        center.notify(Notification::error("first"));
        center.notify(Notification::error("second"));

        // "first" went when "second" arrived; "second" is past its zero lifetime
        assert_eq!(center.toasts.lock().len(), 1);
        assert_eq!(center.toasts.lock()[0].message, "second");
        assert!(center.toasts().is_empty());
        assert!(center.messages(NotificationLevel::Error).is_empty());
    }
}
