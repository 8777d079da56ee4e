//! # events-client
//!
//! The Veterinaria system-event controller.
//!
//! ## Components
//!
//! - **Connectivity Prober**: answers "is the network reachable now?"
//! - **Sync Job Controller**: fire-and-forget start/stop of the background sync job
//! - **Notification Channel Manager**: one channel, one display slot
//! - **Event Dispatcher**: routes each system event and never fails
//!
//! Every host singleton (network stack, job supervisor, notification service)
//! sits behind a trait in [`host`], so tests swap in the mocks and the CLI
//! swaps in the in-process implementations.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use veterinaria_events_client::{
//!     EventDispatcher, MockConnectivity, MockJobSupervisor, MockNotificationHost,
//! };
//! use veterinaria_events_core::{HostCapabilities, PlatformProfile};
//! use veterinaria_events_types::{JobCommand, SystemEvent};
//!
//! let jobs = MockJobSupervisor::new();
//! let notifications = MockNotificationHost::new();
//! let dispatcher = EventDispatcher::new(
//!     PlatformProfile::resolve(HostCapabilities::new(34)),
//!     Arc::new(MockConnectivity::online()),
//!     Arc::new(jobs.clone()),
//!     Arc::new(notifications.clone()),
//! );
//!
//! dispatcher.dispatch(SystemEvent::BootCompleted);
//!
//! assert_eq!(jobs.effective_commands(), vec![JobCommand::Start]);
//! assert_eq!(notifications.visible().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dispatcher;
pub mod host;
pub mod job;
pub mod notifier;
pub mod prober;

pub use dispatcher::EventDispatcher;
pub use host::{
    ConnectivityHost, HeartbeatJob, HostError, InProcessSupervisor, JobSupervisor,
    MockConnectivity, MockJobSupervisor, MockNotificationHost, NetCapability,
    NetworkCapabilities, NetworkInfo, NotificationHost, NotificationTray, StaticConnectivity,
    SyncJob,
};
pub use job::SyncJobController;
pub use notifier::NotificationChannelManager;
pub use prober::ConnectivityProber;
