//! # events-core
//!
//! Pure logic for the Veterinaria system-event controller (no I/O, instant tests).
//!
//! ## Design Philosophy
//!
//! Everything here takes input and produces output without side effects:
//! - [`route`] maps a [`SystemEvent`](veterinaria_events_types::SystemEvent) to a [`Plan`] of actions
//! - [`PlatformProfile`] resolves the host API level into the code paths to use
//!
//! The effects (starting the job, posting notifications, querying the
//! network) are performed by `events-client`, which interprets the plans.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod messages;
pub mod platform;
pub mod router;

pub use platform::{
    ConnectivityStrategy, HostCapabilities, PlatformProfile, API_LEVEL_CAPABILITIES,
    API_LEVEL_FOREGROUND_JOBS,
};
pub use router::{route, route_connectivity, Action, Plan, Route};
