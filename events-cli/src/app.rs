//! Wiring of the dispatcher onto in-process hosts.

use anyhow::{Context, Result};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use veterinaria_events_client::{
    EventDispatcher, HeartbeatJob, InProcessSupervisor, NotificationTray, StaticConnectivity,
};
use veterinaria_events_core::{HostCapabilities, PlatformProfile};
use veterinaria_events_types::{Notification, NotificationChannelDescriptor, SyncJobState};

use crate::config::Config;

/// A running controller with its simulated host.
pub struct App {
    api_level: u32,
    profile: PlatformProfile,
    dispatcher: EventDispatcher,
    supervisor: InProcessSupervisor,
    tray: Arc<NotificationTray>,
}

/// Snapshot of host state after dispatching.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Simulated API level.
    pub api_level: u32,
    /// Resolved platform profile.
    pub profile: PlatformProfile,
    /// Sync job state once all commands are applied.
    pub job: SyncJobState,
    /// Registered notification channels.
    pub channels: Vec<NotificationChannelDescriptor>,
    /// Visible notifications.
    pub notifications: Vec<SlotView>,
}

/// One visible notification.
#[derive(Debug, Serialize)]
pub struct SlotView {
    /// Slot id.
    pub id: i32,
    /// The notification shown.
    #[serde(flatten)]
    pub notification: Notification,
}

impl App {
    /// Build the controller. Must be called from within a Tokio runtime.
    pub fn start(config: &Config) -> Self {
        let caps = HostCapabilities::new(config.host.api_level);
        let profile = PlatformProfile::resolve(caps);
        tracing::debug!(api_level = caps.api_level, ?profile, "platform resolved");

        let job = Arc::new(HeartbeatJob::new(Duration::from_millis(
            config.job.heartbeat_ms.max(1),
        )));
        let supervisor = InProcessSupervisor::spawn_with_stop_timeout(
            job,
            Duration::from_millis(config.job.stop_timeout_ms),
        );
        let tray = Arc::new(NotificationTray::new(profile.notification_channels));
        let connectivity = Arc::new(StaticConnectivity::new(config.connectivity.online));

        let dispatcher = EventDispatcher::new(
            profile,
            connectivity,
            Arc::new(supervisor.clone()),
            tray.clone(),
        );

        Self {
            api_level: caps.api_level,
            profile,
            dispatcher,
            supervisor,
            tray,
        }
    }

    /// The dispatcher.
    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// Wait for the job supervisor and collect host state.
    pub async fn report(&self) -> Result<Report> {
        let job = self
            .supervisor
            .settled()
            .await
            .context("Job supervisor is not running")?;

        Ok(Report {
            api_level: self.api_level,
            profile: self.profile,
            job,
            channels: self.tray.channels(),
            notifications: self
                .tray
                .visible()
                .into_iter()
                .map(|(id, notification)| SlotView { id, notification })
                .collect(),
        })
    }
}
