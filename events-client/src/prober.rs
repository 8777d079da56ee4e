//! Connectivity Prober.

use std::sync::Arc;

use veterinaria_events_core::ConnectivityStrategy;

use crate::host::{ConnectivityHost, NetCapability};

/// Answers whether the network is reachable right now.
///
/// The query strategy is fixed at construction from the platform profile.
/// A missing network, missing capability info or a failed host query all
/// read as "not reachable".
#[derive(Clone)]
pub struct ConnectivityProber {
    host: Arc<dyn ConnectivityHost>,
    strategy: ConnectivityStrategy,
}

impl ConnectivityProber {
    /// Create a prober using the given strategy.
    pub fn new(host: Arc<dyn ConnectivityHost>, strategy: ConnectivityStrategy) -> Self {
        Self { host, strategy }
    }

    /// The strategy in use.
    pub fn strategy(&self) -> ConnectivityStrategy {
        self.strategy
    }

    /// Whether the active network can reach the internet.
    pub fn is_reachable(&self) -> bool {
        let reachable = match self.strategy {
            ConnectivityStrategy::Capabilities => self
                .host
                .active_network_capabilities()
                .map(|caps| caps.is_some_and(|c| c.has(NetCapability::Internet))),
            ConnectivityStrategy::LegacyNetworkInfo => self
                .host
                .active_network_info()
                .map(|info| info.is_some_and(|i| i.connected)),
        };

        reachable.unwrap_or_else(|e| {
            tracing::warn!("connectivity query failed, assuming offline: {}", e);
            false
        })
    }
}

impl std::fmt::Debug for ConnectivityProber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectivityProber")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MockConnectivity, NetworkCapabilities, NetworkInfo};

    fn prober(mock: &MockConnectivity, strategy: ConnectivityStrategy) -> ConnectivityProber {
        ConnectivityProber::new(Arc::new(mock.clone()), strategy)
    }

    #[test]
    fn internet_capability_is_reachable() {
        let mock = MockConnectivity::new();
        mock.set_capabilities(Some(NetworkCapabilities::new().with(NetCapability::Internet)));

        assert!(prober(&mock, ConnectivityStrategy::Capabilities).is_reachable());
    }

    #[test]
    fn empty_or_absent_capabilities_are_unreachable() {
        let mock = MockConnectivity::new();
        let prober = prober(&mock, ConnectivityStrategy::Capabilities);
        assert!(!prober.is_reachable());

        mock.set_capabilities(Some(NetworkCapabilities::new()));
        assert!(!prober.is_reachable());

        mock.set_capabilities(Some(NetworkCapabilities::new().with(NetCapability::NotMetered)));
        assert!(!prober.is_reachable());
    }

    #[test]
    fn legacy_strategy_reads_network_info() {
        let mock = MockConnectivity::new();
        let prober = prober(&mock, ConnectivityStrategy::LegacyNetworkInfo);
        assert!(!prober.is_reachable());

        mock.set_info(Some(NetworkInfo { connected: false }));
        assert!(!prober.is_reachable());

        mock.set_info(Some(NetworkInfo { connected: true }));
        assert!(prober.is_reachable());

        assert_eq!(mock.capability_queries(), 0);
        assert_eq!(mock.info_queries(), 3);
    }

    #[test]
    fn capabilities_strategy_never_reads_network_info() {
        let mock = MockConnectivity::online();
        assert!(prober(&mock, ConnectivityStrategy::Capabilities).is_reachable());
        assert_eq!(mock.info_queries(), 0);
    }

    #[test]
    fn host_failure_reads_as_unreachable() {
        let mock = MockConnectivity::online();
        mock.fail_next("service died");
        assert!(!prober(&mock, ConnectivityStrategy::Capabilities).is_reachable());
    }
}
