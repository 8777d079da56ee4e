//! Notification Channel Manager.

use std::sync::Arc;

use veterinaria_events_types::{
    Notification, NotificationChannelDescriptor, NotificationRequest, NOTIFICATION_ID,
};

use crate::host::{HostError, NotificationHost};

/// Keeps the system-events channel registered and posts into its single
/// display slot.
///
/// Every post goes to [`NOTIFICATION_ID`], so at most one system-event
/// notification is visible at a time.
#[derive(Clone)]
pub struct NotificationChannelManager {
    host: Arc<dyn NotificationHost>,
    channel: NotificationChannelDescriptor,
    channels_supported: bool,
}

impl NotificationChannelManager {
    /// Create a manager. `channels_supported` comes from the platform profile;
    /// without channel support [`ensure_channel`](Self::ensure_channel) does nothing.
    pub fn new(host: Arc<dyn NotificationHost>, channels_supported: bool) -> Self {
        Self {
            host,
            channel: NotificationChannelDescriptor::system_events(),
            channels_supported,
        }
    }

    /// The channel descriptor.
    pub fn channel(&self) -> &NotificationChannelDescriptor {
        &self.channel
    }

    /// Register the channel. Safe to call any number of times.
    pub fn ensure_channel(&self) -> Result<(), HostError> {
        if !self.channels_supported {
            return Ok(());
        }
        self.host.create_channel(&self.channel)
    }

    /// Show a notification, replacing the one currently in the slot.
    pub fn show(&self, title: &str, body: &str) -> Result<(), HostError> {
        self.post(NotificationRequest::new(title, body))
    }

    /// Show a prepared request.
    pub fn post(&self, request: NotificationRequest) -> Result<(), HostError> {
        self.ensure_channel()?;

        tracing::debug!(title = %request.title, "posting notification");
        let notification = Notification::from_request(&self.channel.id, request);
        self.host.notify(NOTIFICATION_ID, notification)
    }
}

impl std::fmt::Debug for NotificationChannelManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationChannelManager")
            .field("channel", &self.channel.id)
            .field("channels_supported", &self.channels_supported)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MockNotificationHost, NotificationTray};
    use veterinaria_events_types::CHANNEL_ID;

    fn manager(mock: &MockNotificationHost, channels: bool) -> NotificationChannelManager {
        NotificationChannelManager::new(Arc::new(mock.clone()), channels)
    }

    #[test]
    fn ensure_channel_is_idempotent() {
        let mock = MockNotificationHost::new();
        let notifier = manager(&mock, true);

        for _ in 0..5 {
            notifier.ensure_channel().unwrap();
        }

        let channels = mock.channels();
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].id, CHANNEL_ID);
    }

    #[test]
    fn no_channel_without_platform_support() {
        let mock = MockNotificationHost::new();
        let notifier = manager(&mock, false);

        notifier.ensure_channel().unwrap();
        notifier.show("Batería baja", "x").unwrap();

        assert_eq!(mock.channel_calls(), 0);
        assert!(mock.slot(NOTIFICATION_ID).is_some());
    }

    #[test]
    fn show_registers_channel_first() {
        // The tray rejects posts to unknown channels, so success proves the
        // channel was created before posting.
        let tray = Arc::new(NotificationTray::new(true));
        let notifier = NotificationChannelManager::new(tray.clone(), true);

        notifier.show("Sin conexión", "Trabajando en modo offline").unwrap();

        assert_eq!(tray.channels().len(), 1);
        assert_eq!(tray.get(NOTIFICATION_ID).unwrap().title, "Sin conexión");
    }

    #[test]
    fn second_show_replaces_first() {
        let mock = MockNotificationHost::new();
        let notifier = manager(&mock, true);

        notifier.show("first", "one").unwrap();
        notifier.show("second", "two").unwrap();

        let visible = mock.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0, NOTIFICATION_ID);
        assert_eq!(visible[0].1.title, "second");
        assert_eq!(visible[0].1.body, "two");
    }

    #[test]
    fn posted_notification_is_auto_cancel() {
        let mock = MockNotificationHost::new();
        manager(&mock, true).show("t", "b").unwrap();

        let n = mock.slot(NOTIFICATION_ID).unwrap();
        assert!(n.auto_cancel);
        assert_eq!(n.channel_id, CHANNEL_ID);
    }
}
