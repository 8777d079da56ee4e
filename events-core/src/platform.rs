//! Host capability resolution.
//!
//! The host's API level decides two things: how connectivity is queried and
//! whether the sync job must be started in foreground mode (channels come
//! with the same threshold). The level is resolved once into a
//! [`PlatformProfile`] that components receive at construction, so no
//! handler ever looks at version numbers.

use serde::{Deserialize, Serialize};
use veterinaria_events_types::ExecutionMode;

/// First API level with per-network capability queries.
pub const API_LEVEL_CAPABILITIES: u32 = 23;

/// First API level that requires foreground execution for long-running
/// background work and supports notification channels.
pub const API_LEVEL_FOREGROUND_JOBS: u32 = 26;

/// What the host reports about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostCapabilities {
    /// Platform API level.
    pub api_level: u32,
}

impl HostCapabilities {
    /// Create capabilities for the given API level.
    pub fn new(api_level: u32) -> Self {
        Self { api_level }
    }
}

/// How reachability is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityStrategy {
    /// Inspect the active network's capability set for internet access.
    Capabilities,
    /// Ask the active network info whether it is connected.
    LegacyNetworkInfo,
}

/// Code paths selected for this host. Resolved once, then passed around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformProfile {
    /// Reachability query strategy.
    pub connectivity: ConnectivityStrategy,
    /// Execution mode for starting the sync job.
    pub start_mode: ExecutionMode,
    /// Whether notification channels must be registered before posting.
    pub notification_channels: bool,
}

impl PlatformProfile {
    /// Resolve the profile for a host.
    pub fn resolve(caps: HostCapabilities) -> Self {
        let modern_jobs = caps.api_level >= API_LEVEL_FOREGROUND_JOBS;
        Self {
            connectivity: if caps.api_level >= API_LEVEL_CAPABILITIES {
                ConnectivityStrategy::Capabilities
            } else {
                ConnectivityStrategy::LegacyNetworkInfo
            },
            start_mode: if modern_jobs {
                ExecutionMode::Foreground
            } else {
                ExecutionMode::Background
            },
            notification_channels: modern_jobs,
        }
    }
}

impl From<HostCapabilities> for PlatformProfile {
    fn from(caps: HostCapabilities) -> Self {
        Self::resolve(caps)
    }
}
