//! In-memory notification service.

use dashmap::DashMap;
use veterinaria_events_types::{Notification, NotificationChannelDescriptor};

use super::{HostError, NotificationHost};

/// Notification service kept in memory.
///
/// Channels are an upsert registry keyed by id, slots are a map keyed by
/// notification id, so a second post to the same id replaces the first.
/// With `require_channels`, posting to an unregistered channel is rejected,
/// the way channel-aware platforms drop such notifications.
#[derive(Debug, Default)]
pub struct NotificationTray {
    channels: DashMap<String, NotificationChannelDescriptor>,
    slots: DashMap<i32, Notification>,
    require_channels: bool,
}

impl NotificationTray {
    /// Create an empty tray.
    pub fn new(require_channels: bool) -> Self {
        Self {
            channels: DashMap::new(),
            slots: DashMap::new(),
            require_channels,
        }
    }

    /// Registered channels, sorted by id.
    pub fn channels(&self) -> Vec<NotificationChannelDescriptor> {
        let mut channels: Vec<_> = self.channels.iter().map(|e| e.value().clone()).collect();
        channels.sort_by(|a, b| a.id.cmp(&b.id));
        channels
    }

    /// Notification shown in a slot.
    pub fn get(&self, id: i32) -> Option<Notification> {
        self.slots.get(&id).map(|n| n.value().clone())
    }

    /// Visible notifications, sorted by slot id.
    pub fn visible(&self) -> Vec<(i32, Notification)> {
        let mut visible: Vec<_> = self
            .slots
            .iter()
            .map(|e| (*e.key(), e.value().clone()))
            .collect();
        visible.sort_by_key(|(id, _)| *id);
        visible
    }

    /// The user dismissed a notification. Returns what was shown.
    pub fn dismiss(&self, id: i32) -> Option<Notification> {
        self.slots.remove(&id).map(|(_, n)| n)
    }
}

impl NotificationHost for NotificationTray {
    fn create_channel(&self, channel: &NotificationChannelDescriptor) -> Result<(), HostError> {
        self.channels.insert(channel.id.clone(), channel.clone());
        Ok(())
    }

    fn notify(&self, id: i32, notification: Notification) -> Result<(), HostError> {
        if self.require_channels && !self.channels.contains_key(&notification.channel_id) {
            return Err(HostError::Rejected(format!(
                "no channel {:?} registered",
                notification.channel_id
            )));
        }

        self.slots.insert(id, notification);
        Ok(())
    }
}
