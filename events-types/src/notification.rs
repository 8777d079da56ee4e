//! Notification channel and delivery values.

use serde::{Deserialize, Serialize};

/// Id of the single channel system-event notifications are posted to.
pub const CHANNEL_ID: &str = "VeterinariaEventos";

/// User-visible channel name.
pub const CHANNEL_NAME: &str = "Eventos del Sistema";

/// User-visible channel description.
pub const CHANNEL_DESCRIPTION: &str = "Notificaciones de eventos del sistema";

/// Fixed display slot. A new delivery replaces the previous one.
pub const NOTIFICATION_ID: i32 = 2001;

/// Icon resource used for every system-event notification.
pub const SMALL_ICON: &str = "ic_dialog_info";

/// Channel importance, as understood by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    /// Never shown.
    None,
    /// Shown only in the shade, no sound.
    Min,
    /// Shown everywhere, no sound.
    Low,
    /// Shown everywhere, makes noise.
    #[default]
    Default,
    /// Shown everywhere, makes noise, may peek.
    High,
}

/// Per-notification priority for hosts without channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Below normal.
    Low,
    /// Normal.
    #[default]
    Default,
    /// Above normal.
    High,
}

/// Declarative description of the notification channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationChannelDescriptor {
    /// Channel id.
    pub id: String,
    /// User-visible name.
    pub display_name: String,
    /// User-visible description.
    pub description: String,
    /// Importance level.
    pub importance: Importance,
}

impl NotificationChannelDescriptor {
    /// The system-events channel.
    pub fn system_events() -> Self {
        Self {
            id: CHANNEL_ID.to_string(),
            display_name: CHANNEL_NAME.to_string(),
            description: CHANNEL_DESCRIPTION.to_string(),
            importance: Importance::Default,
        }
    }
}

impl Default for NotificationChannelDescriptor {
    fn default() -> Self {
        Self::system_events()
    }
}

/// Title and body of a notification to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// Title line.
    pub title: String,
    /// Body text.
    pub body: String,
}

impl NotificationRequest {
    /// Create a new request.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A fully built notification, ready for the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Channel the notification belongs to.
    pub channel_id: String,
    /// Title line.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Icon resource.
    pub small_icon: String,
    /// Priority for hosts without channels.
    pub priority: Priority,
    /// Dismiss when the user taps it.
    pub auto_cancel: bool,
}

impl Notification {
    /// Build a system-event notification from a request.
    pub fn from_request(channel_id: &str, request: NotificationRequest) -> Self {
        Self {
            channel_id: channel_id.to_string(),
            title: request.title,
            body: request.body,
            small_icon: SMALL_ICON.to_string(),
            priority: Priority::Default,
            auto_cancel: true,
        }
    }
}
