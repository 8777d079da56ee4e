//! Host abstraction for the system-event controller.
//!
//! The controller never owns the network stack, the job supervisor or the
//! notification service. It talks to them through these traits:
//! - [`ConnectivityHost`] answers queries about the active network
//! - [`JobSupervisor`] accepts fire-and-forget job lifecycle commands
//! - [`NotificationHost`] registers channels and posts into display slots
//!
//! Implementations provided here: mocks for tests (`mock`), and in-process
//! hosts used by the CLI (`network`, `supervisor`, `tray`).
//!
//! All methods are synchronous and must return promptly; any real work
//! belongs to the host, not to the caller.

mod mock;
mod network;
mod supervisor;
mod tray;

pub use mock::{MockConnectivity, MockJobSupervisor, MockNotificationHost};
pub use network::StaticConnectivity;
pub use supervisor::{HeartbeatJob, InProcessSupervisor, SyncJob};
pub use tray::NotificationTray;

use std::collections::BTreeSet;

use thiserror::Error;
use veterinaria_events_types::{
    ExecutionMode, JobCommand, Notification, NotificationChannelDescriptor,
};

/// Host errors.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host refused the request (e.g. background execution restrictions).
    #[error("rejected by host: {0}")]
    Rejected(String),

    /// The host service is not available.
    #[error("host service unavailable: {0}")]
    Unavailable(String),
}

/// A capability bit of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NetCapability {
    /// The network can reach the internet.
    Internet,
    /// Internet access was validated by the host.
    Validated,
    /// The network is not metered.
    NotMetered,
    /// The network is not roaming.
    NotRoaming,
}

/// Capability set of the active network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkCapabilities {
    capabilities: BTreeSet<NetCapability>,
}

impl NetworkCapabilities {
    /// An empty capability set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a capability.
    pub fn with(mut self, capability: NetCapability) -> Self {
        self.capabilities.insert(capability);
        self
    }

    /// Check for a capability.
    pub fn has(&self, capability: NetCapability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

impl FromIterator<NetCapability> for NetworkCapabilities {
    fn from_iter<I: IntoIterator<Item = NetCapability>>(iter: I) -> Self {
        Self {
            capabilities: iter.into_iter().collect(),
        }
    }
}

/// Coarse information about the active network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Whether the network is connected.
    pub connected: bool,
}

/// Network state queries.
pub trait ConnectivityHost: Send + Sync {
    /// Capabilities of the active network, `None` when there is no active
    /// network or the host has no capability information for it.
    fn active_network_capabilities(&self) -> Result<Option<NetworkCapabilities>, HostError>;

    /// Coarse info for the active network, `None` when there is none.
    fn active_network_info(&self) -> Result<Option<NetworkInfo>, HostError>;
}

/// Background job lifecycle commands.
///
/// `submit` enqueues and returns; it never waits for the job to reach the
/// target state. Redundant commands (start while running, stop while
/// stopped) are accepted and have no effect.
pub trait JobSupervisor: Send + Sync {
    /// Enqueue a lifecycle command.
    fn submit(&self, command: JobCommand, mode: ExecutionMode) -> Result<(), HostError>;
}

/// Notification service.
pub trait NotificationHost: Send + Sync {
    /// Register a channel. Upsert: registering an existing id is a no-op.
    fn create_channel(&self, channel: &NotificationChannelDescriptor) -> Result<(), HostError>;

    /// Post a notification to a slot, replacing whatever the slot shows.
    fn notify(&self, id: i32, notification: Notification) -> Result<(), HostError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_set_membership() {
        let caps: NetworkCapabilities = [NetCapability::Internet, NetCapability::Validated]
            .into_iter()
            .collect();
        assert!(caps.has(NetCapability::Internet));
        assert!(!caps.has(NetCapability::NotMetered));
        assert!(NetworkCapabilities::new().is_empty());
    }

    #[test]
    fn host_error_display() {
        let err = HostError::Rejected("background start not allowed".into());
        assert_eq!(
            err.to_string(),
            "rejected by host: background start not allowed"
        );
    }
}
