//! Background sync job lifecycle values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::actions;

/// Observable state of the sync job. Owned by the host supervisor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncJobState {
    /// Not running.
    #[default]
    Stopped,
    /// Running.
    Running,
}

/// A lifecycle command submitted to the job supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobCommand {
    /// Start (or keep running) the sync job.
    Start,
    /// Stop the sync job if it is running.
    Stop,
}

impl JobCommand {
    /// Wire action string for this command.
    pub fn action(self) -> &'static str {
        match self {
            Self::Start => actions::ACTION_START_SYNC,
            Self::Stop => actions::ACTION_STOP_SYNC,
        }
    }

    /// The state the job reaches once this command is applied.
    pub fn target_state(self) -> SyncJobState {
        match self {
            Self::Start => SyncJobState::Running,
            Self::Stop => SyncJobState::Stopped,
        }
    }
}

impl fmt::Display for JobCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action())
    }
}

/// How the host should run the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Elevated, foreground-class execution required for long-running work
    /// on newer platforms.
    Foreground,
    /// Standard background execution.
    Background,
}
