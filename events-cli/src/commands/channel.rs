//! Show the notification channel and platform profile.

use anyhow::Result;
use serde_json::json;
use veterinaria_events_core::{HostCapabilities, PlatformProfile};
use veterinaria_events_types::{NotificationChannelDescriptor, NOTIFICATION_ID};

use crate::config::Config;

/// Run the channel command.
pub fn run(config: &Config) -> Result<()> {
    let profile = PlatformProfile::resolve(HostCapabilities::new(config.host.api_level));
    let out = json!({
        "channel": NotificationChannelDescriptor::system_events(),
        "slot": NOTIFICATION_ID,
        "profile": profile,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
