//! Event routing table.
//!
//! [`route`] maps each [`SystemEvent`] to the effects the controller must
//! produce. It does no I/O: the result is a list of [`Action`]s that the
//! dispatcher executes in order. Connectivity changes need one host query
//! first, so they come back as [`Route::NeedsConnectivity`] and are finished
//! with [`route_connectivity`].

use veterinaria_events_types::{NotificationRequest, SystemEvent};

use crate::messages;

/// An effect to execute. Instructions, not side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Submit a start command to the sync job.
    StartSync,
    /// Submit a stop command to the sync job.
    StopSync,
    /// Post a notification to the system-events slot.
    Notify(NotificationRequest),
}

/// The outcome of routing one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Diagnostic line describing what is happening.
    pub diagnostic: String,
    /// Actions in execution order (job command before notification).
    pub actions: Vec<Action>,
}

impl Plan {
    fn new(diagnostic: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            diagnostic: diagnostic.into(),
            actions,
        }
    }

    fn log_only(diagnostic: impl Into<String>) -> Self {
        Self::new(diagnostic, Vec::new())
    }

    /// Whether executing this plan has no effect besides logging.
    pub fn is_log_only(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Result of [`route`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The plan is complete.
    Plan(Plan),
    /// Reachability must be queried; finish with [`route_connectivity`].
    NeedsConnectivity,
}

/// Route an event to its plan.
pub fn route(event: &SystemEvent) -> Route {
    let plan = match event {
        SystemEvent::BootCompleted => Plan::new(
            "device booted, starting services",
            vec![
                Action::StartSync,
                Action::Notify(messages::boot_completed()),
            ],
        ),
        SystemEvent::ConnectivityChanged => return Route::NeedsConnectivity,
        SystemEvent::BatteryLow => Plan::new(
            "battery low, pausing non-critical services",
            vec![Action::StopSync, Action::Notify(messages::battery_low())],
        ),
        SystemEvent::BatteryOkay => {
            Plan::new("battery recovered, resuming services", vec![Action::StartSync])
        }
        SystemEvent::PowerConnected => Plan::new(
            "device connected to power",
            vec![Action::Notify(messages::power_connected())],
        ),
        SystemEvent::PowerDisconnected => Plan::log_only("device disconnected from power"),
        SystemEvent::AirplaneModeChanged { active: true } => Plan::new(
            "airplane mode on",
            vec![Action::Notify(messages::airplane_mode_on())],
        ),
        SystemEvent::AirplaneModeChanged { active: false } => Plan::log_only("airplane mode off"),
        SystemEvent::AppointmentReminder {
            pet_name,
            appointment_time,
        } => {
            let request =
                messages::appointment_reminder(pet_name.as_deref(), appointment_time.as_deref());
            Plan::new(
                format!(
                    "appointment reminder for {}",
                    pet_name.as_deref().unwrap_or(messages::DEFAULT_PET_NAME)
                ),
                vec![Action::Notify(request)],
            )
        }
        SystemEvent::ManualSyncRequested => {
            Plan::new("manual data sync requested", vec![Action::StartSync])
        }
        SystemEvent::Unrecognized { raw_tag } => {
            Plan::log_only(format!("unhandled action: {raw_tag:?}"))
        }
    };

    Route::Plan(plan)
}

/// Finish routing a connectivity change once reachability is known.
///
/// Losing the network leaves the job untouched.
pub fn route_connectivity(reachable: bool) -> Plan {
    if reachable {
        Plan::new(
            "internet connection available",
            vec![
                Action::StartSync,
                Action::Notify(messages::connectivity_restored()),
            ],
        )
    } else {
        Plan::new(
            "no internet connection",
            vec![Action::Notify(messages::connectivity_lost())],
        )
    }
}
