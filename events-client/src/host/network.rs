//! Connectivity host backed by a settable flag.

use std::sync::atomic::{AtomicBool, Ordering};

use super::{ConnectivityHost, HostError, NetCapability, NetworkCapabilities, NetworkInfo};

/// Connectivity host that reports a fixed online/offline state.
///
/// Online means an active, validated internet network; offline means no
/// active network at all.
#[derive(Debug)]
pub struct StaticConnectivity {
    online: AtomicBool,
}

impl StaticConnectivity {
    /// Create a host in the given state.
    pub fn new(online: bool) -> Self {
        Self {
            online: AtomicBool::new(online),
        }
    }

    /// Change the reported state.
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::Release);
    }

    /// The reported state.
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }
}

impl ConnectivityHost for StaticConnectivity {
    fn active_network_capabilities(&self) -> Result<Option<NetworkCapabilities>, HostError> {
        Ok(self.is_online().then(|| {
            NetworkCapabilities::new()
                .with(NetCapability::Internet)
                .with(NetCapability::Validated)
        }))
    }

    fn active_network_info(&self) -> Result<Option<NetworkInfo>, HostError> {
        Ok(self.is_online().then_some(NetworkInfo { connected: true }))
    }
}
