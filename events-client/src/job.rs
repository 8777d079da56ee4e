//! Sync Job Controller.

use std::sync::Arc;

use veterinaria_events_types::{ExecutionMode, JobCommand};

use crate::host::{HostError, JobSupervisor};

/// Issues start/stop commands for the background sync job.
///
/// Commands are fire-and-forget: they are enqueued with the supervisor and
/// the call returns without waiting for the job to change state. Starting
/// uses the platform's start mode (foreground on newer hosts); stopping is
/// always a standard background command.
#[derive(Clone)]
pub struct SyncJobController {
    supervisor: Arc<dyn JobSupervisor>,
    start_mode: ExecutionMode,
}

impl SyncJobController {
    /// Create a controller.
    pub fn new(supervisor: Arc<dyn JobSupervisor>, start_mode: ExecutionMode) -> Self {
        Self {
            supervisor,
            start_mode,
        }
    }

    /// Ask the supervisor to start the job.
    pub fn start(&self) -> Result<(), HostError> {
        self.submit(JobCommand::Start, self.start_mode)
    }

    /// Ask the supervisor to stop the job.
    pub fn stop(&self) -> Result<(), HostError> {
        self.submit(JobCommand::Stop, ExecutionMode::Background)
    }

    fn submit(&self, command: JobCommand, mode: ExecutionMode) -> Result<(), HostError> {
        tracing::debug!(?mode, "submitting {}", command);
        self.supervisor.submit(command, mode)
    }
}

impl std::fmt::Debug for SyncJobController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncJobController")
            .field("start_mode", &self.start_mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockJobSupervisor;

    fn controller(mock: &MockJobSupervisor, mode: ExecutionMode) -> SyncJobController {
        SyncJobController::new(Arc::new(mock.clone()), mode)
    }

    #[test]
    fn start_uses_platform_mode() {
        let mock = MockJobSupervisor::new();
        controller(&mock, ExecutionMode::Foreground).start().unwrap();
        controller(&mock, ExecutionMode::Background).start().unwrap();

        assert_eq!(
            mock.submissions(),
            vec![
                (JobCommand::Start, ExecutionMode::Foreground),
                (JobCommand::Start, ExecutionMode::Background),
            ]
        );
    }

    #[test]
    fn stop_is_always_background() {
        let mock = MockJobSupervisor::new();
        controller(&mock, ExecutionMode::Foreground).stop().unwrap();
        assert_eq!(
            mock.submissions(),
            vec![(JobCommand::Stop, ExecutionMode::Background)]
        );
    }

    #[test]
    fn repeated_start_has_single_effect() {
        let single = MockJobSupervisor::new();
        controller(&single, ExecutionMode::Foreground).start().unwrap();

        let repeated = MockJobSupervisor::new();
        let jobs = controller(&repeated, ExecutionMode::Foreground);
        jobs.start().unwrap();
        jobs.start().unwrap();
        jobs.start().unwrap();

        assert_eq!(
            repeated.effective_commands().len(),
            single.effective_commands().len()
        );
    }

    #[test]
    fn repeated_stop_has_single_effect() {
        let single = MockJobSupervisor::new();
        let jobs = controller(&single, ExecutionMode::Foreground);
        jobs.start().unwrap();
        jobs.stop().unwrap();

        let repeated = MockJobSupervisor::new();
        let jobs = controller(&repeated, ExecutionMode::Foreground);
        jobs.start().unwrap();
        jobs.stop().unwrap();
        jobs.stop().unwrap();

        assert_eq!(repeated.effective_commands(), single.effective_commands());
    }

    #[test]
    fn stop_while_stopped_is_not_an_error() {
        let mock = MockJobSupervisor::new();
        assert!(controller(&mock, ExecutionMode::Foreground).stop().is_ok());
        assert!(mock.effective_commands().is_empty());
    }

    #[test]
    fn rejection_is_returned() {
        let mock = MockJobSupervisor::new();
        mock.fail_next("background start not allowed");
        let err = controller(&mock, ExecutionMode::Foreground)
            .start()
            .unwrap_err();
        assert!(matches!(err, HostError::Rejected(_)));
    }
}
