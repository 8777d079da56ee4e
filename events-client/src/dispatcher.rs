//! Event Dispatcher - the controller's entry point.
//!
//! # Architecture
//!
//! The dispatcher asks the pure router (events-core) for a plan and
//! interprets the plan's actions against the three components.
//!
//! ```text
//! host event → EventDispatcher → SyncJobController → JobSupervisor
//!                   ↓         ↘ NotificationChannelManager → NotificationHost
//!          events-core router  ↘ ConnectivityProber → ConnectivityHost
//! ```
//!
//! `dispatch` runs on a host-owned, time-boxed path. It never returns an
//! error and never lets a panic escape: host rejections are logged and the
//! remaining actions still run.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use veterinaria_events_core::{route, route_connectivity, Action, Plan, PlatformProfile, Route};
use veterinaria_events_types::{RawEvent, SystemEvent};

use crate::host::{ConnectivityHost, JobSupervisor, NotificationHost};
use crate::job::SyncJobController;
use crate::notifier::NotificationChannelManager;
use crate::prober::ConnectivityProber;

/// Routes system events to job commands and notifications.
///
/// Holds no per-event state, so one instance can serve concurrent
/// deliveries from any number of threads.
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    prober: ConnectivityProber,
    jobs: SyncJobController,
    notifier: NotificationChannelManager,
}

impl EventDispatcher {
    /// Build a dispatcher over the given hosts.
    pub fn new(
        profile: PlatformProfile,
        connectivity: Arc<dyn ConnectivityHost>,
        supervisor: Arc<dyn JobSupervisor>,
        notifications: Arc<dyn NotificationHost>,
    ) -> Self {
        Self::from_parts(
            ConnectivityProber::new(connectivity, profile.connectivity),
            SyncJobController::new(supervisor, profile.start_mode),
            NotificationChannelManager::new(notifications, profile.notification_channels),
        )
    }

    /// Build a dispatcher from already configured components.
    pub fn from_parts(
        prober: ConnectivityProber,
        jobs: SyncJobController,
        notifier: NotificationChannelManager,
    ) -> Self {
        Self {
            prober,
            jobs,
            notifier,
        }
    }

    /// Decode a raw host delivery and dispatch it.
    pub fn dispatch_raw(&self, raw: &RawEvent) {
        self.dispatch(SystemEvent::from_raw(raw));
    }

    /// Handle one event. Never fails.
    ///
    /// Each action runs on its own: a rejection or panic in one leaves the
    /// rest of the plan to run.
    pub fn dispatch(&self, event: SystemEvent) {
        tracing::debug!(action = %event, "event received");

        let Some(plan) = guarded(&event, || self.plan(&event)) else {
            return;
        };
        tracing::debug!("{}", plan.diagnostic);

        for action in plan.actions {
            guarded(&event, || self.execute(action));
        }
    }

    fn plan(&self, event: &SystemEvent) -> Plan {
        match route(event) {
            Route::Plan(plan) => plan,
            Route::NeedsConnectivity => route_connectivity(self.prober.is_reachable()),
        }
    }

    fn execute(&self, action: Action) {
        let (what, result) = match action {
            Action::StartSync => ("start sync job", self.jobs.start()),
            Action::StopSync => ("stop sync job", self.jobs.stop()),
            Action::Notify(request) => ("show notification", self.notifier.post(request)),
        };

        // No retry: the host decides whether and when work may run.
        if let Err(e) = result {
            tracing::warn!("failed to {}: {}", what, e);
        }
    }
}

/// Run `f`, logging and swallowing a panic.
fn guarded<T>(event: &SystemEvent, f: impl FnOnce() -> T) -> Option<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(payload) => {
            tracing::error!(
                action = %event,
                "event handler panicked: {}",
                panic_message(payload.as_ref())
            );
            None
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic>")
}
