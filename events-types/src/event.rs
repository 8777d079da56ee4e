//! Host deliveries and the typed event variant.
//!
//! The host hands over a [`RawEvent`]: an action string plus a bag of loosely
//! typed extras. [`SystemEvent::from_raw`] turns that into a closed variant
//! with typed fields, applying every default at this boundary so handlers
//! never look at extras.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::actions;
use crate::error::EventError;

/// A single extra value attached to a raw delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraValue {
    /// Boolean extra.
    Bool(bool),
    /// Integer extra.
    Int(i64),
    /// Text extra.
    Text(String),
    /// Any other shape (floats, null, arrays, objects). Never read.
    Other(serde_json::Value),
}

impl ExtraValue {
    /// Parse a command-line style value.
    ///
    /// `true`/`false` become [`ExtraValue::Bool`], integers become
    /// [`ExtraValue::Int`], anything else is kept as text.
    pub fn parse(value: &str) -> Self {
        match value {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            other => match other.parse::<i64>() {
                Ok(n) => Self::Int(n),
                Err(_) => Self::Text(other.to_string()),
            },
        }
    }

    /// The boolean value, if this is a boolean extra.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The text value, if this is a text extra.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The value rendered as text. Scalars convert, [`ExtraValue::Other`]
    /// does not.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Int(n) => Some(n.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::Other(_) => None,
        }
    }
}

/// A delivery as received from the host, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// The action string. Hosts may deliver without one.
    #[serde(default)]
    pub action: Option<String>,
    /// Extras keyed by name.
    #[serde(default)]
    pub extras: BTreeMap<String, ExtraValue>,
}

impl RawEvent {
    /// Create a raw event with the given action and no extras.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            extras: BTreeMap::new(),
        }
    }

    /// Attach an extra.
    pub fn with_extra(mut self, key: impl Into<String>, value: ExtraValue) -> Self {
        self.extras.insert(key.into(), value);
        self
    }

    /// Attach an extra given as `KEY=VALUE`.
    pub fn with_extra_arg(self, arg: &str) -> Result<Self, EventError> {
        let (key, value) = arg
            .split_once('=')
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| EventError::InvalidExtra(arg.to_string()))?;
        Ok(self.with_extra(key, ExtraValue::parse(value)))
    }

    fn bool_extra(&self, key: &str) -> Option<bool> {
        self.extras.get(key).and_then(ExtraValue::as_bool)
    }

    fn text_extra(&self, key: &str) -> Option<String> {
        self.extras.get(key).and_then(ExtraValue::to_text)
    }
}

/// A classified system event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemEvent {
    /// The device finished booting.
    BootCompleted,
    /// Network connectivity changed; reachability must be queried.
    ConnectivityChanged,
    /// Battery is low.
    BatteryLow,
    /// Battery recovered.
    BatteryOkay,
    /// Charger connected.
    PowerConnected,
    /// Charger disconnected.
    PowerDisconnected,
    /// Airplane mode toggled.
    AirplaneModeChanged {
        /// Whether airplane mode is now on.
        active: bool,
    },
    /// Reminder for an upcoming appointment.
    AppointmentReminder {
        /// Name of the pet, if supplied.
        pet_name: Option<String>,
        /// Appointment time, if supplied.
        appointment_time: Option<String>,
    },
    /// The application asked for a sync.
    ManualSyncRequested,
    /// Any action this controller does not handle.
    Unrecognized {
        /// The action as delivered (empty when absent).
        raw_tag: String,
    },
}

impl SystemEvent {
    /// Classify a raw delivery. Never fails.
    ///
    /// Missing or wrongly typed extras fall back to their defaults: `state`
    /// reads as `false` unless it is a boolean. Reminder fields accept any
    /// scalar and read as absent otherwise.
    pub fn from_raw(raw: &RawEvent) -> Self {
        let Some(action) = raw.action.as_deref() else {
            return Self::Unrecognized {
                raw_tag: String::new(),
            };
        };

        match action {
            actions::BOOT_COMPLETED => Self::BootCompleted,
            actions::CONNECTIVITY_CHANGE | actions::CONNECTIVITY_ACTION => {
                Self::ConnectivityChanged
            }
            actions::BATTERY_LOW => Self::BatteryLow,
            actions::BATTERY_OKAY => Self::BatteryOkay,
            actions::POWER_CONNECTED => Self::PowerConnected,
            actions::POWER_DISCONNECTED => Self::PowerDisconnected,
            actions::AIRPLANE_MODE_CHANGED => Self::AirplaneModeChanged {
                active: raw.bool_extra(actions::EXTRA_STATE).unwrap_or(false),
            },
            actions::APPOINTMENT_REMINDER => Self::AppointmentReminder {
                pet_name: raw.text_extra(actions::EXTRA_PET_NAME),
                appointment_time: raw.text_extra(actions::EXTRA_APPOINTMENT_TIME),
            },
            actions::MANUAL_SYNC => Self::ManualSyncRequested,
            other => Self::Unrecognized {
                raw_tag: other.to_string(),
            },
        }
    }

    /// Canonical action string for this event.
    pub fn tag(&self) -> &str {
        match self {
            Self::BootCompleted => actions::BOOT_COMPLETED,
            Self::ConnectivityChanged => actions::CONNECTIVITY_CHANGE,
            Self::BatteryLow => actions::BATTERY_LOW,
            Self::BatteryOkay => actions::BATTERY_OKAY,
            Self::PowerConnected => actions::POWER_CONNECTED,
            Self::PowerDisconnected => actions::POWER_DISCONNECTED,
            Self::AirplaneModeChanged { .. } => actions::AIRPLANE_MODE_CHANGED,
            Self::AppointmentReminder { .. } => actions::APPOINTMENT_REMINDER,
            Self::ManualSyncRequested => actions::MANUAL_SYNC,
            Self::Unrecognized { raw_tag } => raw_tag,
        }
    }
}

impl From<&RawEvent> for SystemEvent {
    fn from(raw: &RawEvent) -> Self {
        Self::from_raw(raw)
    }
}

impl fmt::Display for SystemEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized { raw_tag } if raw_tag.is_empty() => f.write_str("<no action>"),
            other => f.write_str(other.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_platform_actions() {
        let cases = [
            (actions::BOOT_COMPLETED, SystemEvent::BootCompleted),
            (actions::BATTERY_LOW, SystemEvent::BatteryLow),
            (actions::BATTERY_OKAY, SystemEvent::BatteryOkay),
            (actions::POWER_CONNECTED, SystemEvent::PowerConnected),
            (actions::POWER_DISCONNECTED, SystemEvent::PowerDisconnected),
            (actions::MANUAL_SYNC, SystemEvent::ManualSyncRequested),
        ];

        for (action, expected) in cases {
            assert_eq!(SystemEvent::from_raw(&RawEvent::new(action)), expected);
        }
    }

    #[test]
    fn connectivity_alias_maps_to_canonical_tag() {
        for action in [actions::CONNECTIVITY_CHANGE, actions::CONNECTIVITY_ACTION] {
            let event = SystemEvent::from_raw(&RawEvent::new(action));
            assert_eq!(event, SystemEvent::ConnectivityChanged);
            assert_eq!(event.tag(), actions::CONNECTIVITY_CHANGE);
        }
    }

    #[test]
    fn airplane_state_defaults_to_false() {
        let missing = RawEvent::new(actions::AIRPLANE_MODE_CHANGED);
        assert_eq!(
            SystemEvent::from_raw(&missing),
            SystemEvent::AirplaneModeChanged { active: false }
        );

        let wrong_type = RawEvent::new(actions::AIRPLANE_MODE_CHANGED)
            .with_extra(actions::EXTRA_STATE, ExtraValue::Text("true".into()));
        assert_eq!(
            SystemEvent::from_raw(&wrong_type),
            SystemEvent::AirplaneModeChanged { active: false }
        );

        let on = RawEvent::new(actions::AIRPLANE_MODE_CHANGED)
            .with_extra(actions::EXTRA_STATE, ExtraValue::Bool(true));
        assert_eq!(
            SystemEvent::from_raw(&on),
            SystemEvent::AirplaneModeChanged { active: true }
        );
    }

    #[test]
    fn reminder_extras_accept_scalars() {
        let raw = RawEvent::new(actions::APPOINTMENT_REMINDER)
            .with_extra(actions::EXTRA_PET_NAME, ExtraValue::Bool(true))
            .with_extra(actions::EXTRA_APPOINTMENT_TIME, ExtraValue::Int(1500));

        assert_eq!(
            SystemEvent::from_raw(&raw),
            SystemEvent::AppointmentReminder {
                pet_name: Some("true".into()),
                appointment_time: Some("1500".into()),
            }
        );
    }

    #[test]
    fn reminder_from_arguments_keeps_numeric_time() {
        let raw = RawEvent::new(actions::APPOINTMENT_REMINDER)
            .with_extra_arg("NOMBRE_MASCOTA=Firulais")
            .unwrap()
            .with_extra_arg("HORA_CITA=1500")
            .unwrap();

        assert_eq!(
            SystemEvent::from_raw(&raw),
            SystemEvent::AppointmentReminder {
                pet_name: Some("Firulais".into()),
                appointment_time: Some("1500".into()),
            }
        );
    }

    #[test]
    fn non_scalar_reminder_extras_read_as_absent() {
        let raw = RawEvent::new(actions::APPOINTMENT_REMINDER)
            .with_extra(actions::EXTRA_PET_NAME, ExtraValue::Other(serde_json::Value::Null))
            .with_extra(
                actions::EXTRA_APPOINTMENT_TIME,
                ExtraValue::Other(serde_json::json!(["15", "00"])),
            );

        assert_eq!(
            SystemEvent::from_raw(&raw),
            SystemEvent::AppointmentReminder {
                pet_name: None,
                appointment_time: None,
            }
        );
    }

    #[test]
    fn unknown_and_missing_actions_are_unrecognized() {
        assert_eq!(
            SystemEvent::from_raw(&RawEvent::new("X")),
            SystemEvent::Unrecognized {
                raw_tag: "X".into()
            }
        );
        assert_eq!(
            SystemEvent::from_raw(&RawEvent::default()),
            SystemEvent::Unrecognized {
                raw_tag: String::new()
            }
        );
        assert_eq!(SystemEvent::from_raw(&RawEvent::default()).to_string(), "<no action>");
    }

    #[test]
    fn extra_values_parse_from_arguments() {
        assert_eq!(ExtraValue::parse("true"), ExtraValue::Bool(true));
        assert_eq!(ExtraValue::parse("42"), ExtraValue::Int(42));
        assert_eq!(ExtraValue::parse("15:00"), ExtraValue::Text("15:00".into()));

        let raw = RawEvent::new(actions::APPOINTMENT_REMINDER)
            .with_extra_arg("HORA_CITA=15:00")
            .unwrap();
        assert_eq!(
            raw.extras.get("HORA_CITA"),
            Some(&ExtraValue::Text("15:00".into()))
        );

        assert!(RawEvent::new("X").with_extra_arg("no-equals").is_err());
        assert!(RawEvent::new("X").with_extra_arg("=value").is_err());
    }

    #[test]
    fn raw_event_reads_from_json() {
        let json = r#"{"action":"android.intent.action.AIRPLANE_MODE","extras":{"state":true}}"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();

        assert_eq!(
            SystemEvent::from_raw(&raw),
            SystemEvent::AirplaneModeChanged { active: true }
        );

        let bare: RawEvent = serde_json::from_str("{}").unwrap();
        assert_eq!(bare, RawEvent::default());
    }

    #[test]
    fn unexpected_extra_shapes_still_decode() {
        let json = r#"{"action":"android.intent.action.AIRPLANE_MODE",
            "extras":{"state":0.5,"level":0.5,"note":null,"tags":["a"],"meta":{"k":1}}}"#;
        let raw: RawEvent = serde_json::from_str(json).unwrap();

        assert_eq!(raw.extras.len(), 5);
        assert_eq!(
            raw.extras.get("level"),
            Some(&ExtraValue::Other(serde_json::json!(0.5)))
        );
        assert_eq!(
            SystemEvent::from_raw(&raw),
            SystemEvent::AirplaneModeChanged { active: false }
        );
    }
}
