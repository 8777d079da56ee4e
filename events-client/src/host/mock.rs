//! Mock hosts for testing.
//!
//! Each mock records what it was asked to do and can be told to fail the
//! next call. Clones share state, so a test keeps one clone for assertions
//! and hands another to the component under test.

use super::{
    ConnectivityHost, HostError, JobSupervisor, NetCapability, NetworkCapabilities, NetworkInfo,
    NotificationHost,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use veterinaria_events_types::{
    ExecutionMode, JobCommand, Notification, NotificationChannelDescriptor, SyncJobState,
};

/// Mock network state.
#[derive(Debug, Default, Clone)]
pub struct MockConnectivity {
    inner: Arc<Mutex<MockConnectivityInner>>,
}

#[derive(Debug, Default)]
struct MockConnectivityInner {
    capabilities: Option<NetworkCapabilities>,
    info: Option<NetworkInfo>,
    capability_queries: usize,
    info_queries: usize,
    fail_next: Option<String>,
}

impl MockConnectivity {
    /// No active network.
    pub fn new() -> Self {
        Self::default()
    }

    /// An active network with internet access, visible to both strategies.
    pub fn online() -> Self {
        let mock = Self::new();
        mock.set_capabilities(Some(
            [NetCapability::Internet, NetCapability::Validated]
                .into_iter()
                .collect(),
        ));
        mock.set_info(Some(NetworkInfo { connected: true }));
        mock
    }

    /// No active network (alias of [`MockConnectivity::new`]).
    pub fn offline() -> Self {
        Self::new()
    }

    /// Set what the capability query returns.
    pub fn set_capabilities(&self, capabilities: Option<NetworkCapabilities>) {
        self.inner.lock().unwrap().capabilities = capabilities;
    }

    /// Set what the network-info query returns.
    pub fn set_info(&self, info: Option<NetworkInfo>) {
        self.inner.lock().unwrap().info = info;
    }

    /// Number of capability queries made.
    pub fn capability_queries(&self) -> usize {
        self.inner.lock().unwrap().capability_queries
    }

    /// Number of network-info queries made.
    pub fn info_queries(&self) -> usize {
        self.inner.lock().unwrap().info_queries
    }

    /// Cause the next query to fail with the given error.
    pub fn fail_next(&self, error: &str) {
        self.inner.lock().unwrap().fail_next = Some(error.to_string());
    }
}

impl ConnectivityHost for MockConnectivity {
    fn active_network_capabilities(&self) -> Result<Option<NetworkCapabilities>, HostError> {
        let mut inner = self.inner.lock().unwrap();
        inner.capability_queries += 1;

        if let Some(error) = inner.fail_next.take() {
            return Err(HostError::Unavailable(error));
        }

        Ok(inner.capabilities.clone())
    }

    fn active_network_info(&self) -> Result<Option<NetworkInfo>, HostError> {
        let mut inner = self.inner.lock().unwrap();
        inner.info_queries += 1;

        if let Some(error) = inner.fail_next.take() {
            return Err(HostError::Unavailable(error));
        }

        Ok(inner.info)
    }
}

/// Mock job supervisor.
///
/// Keeps two logs: every submission as received, and the commands that
/// actually changed the job state. The second one is what idempotence is
/// asserted on.
#[derive(Debug, Default, Clone)]
pub struct MockJobSupervisor {
    inner: Arc<Mutex<MockJobSupervisorInner>>,
}

#[derive(Debug, Default)]
struct MockJobSupervisorInner {
    state: SyncJobState,
    submissions: Vec<(JobCommand, ExecutionMode)>,
    effective: Vec<JobCommand>,
    fail_next: Option<String>,
}

impl MockJobSupervisor {
    /// Create a new mock supervisor with the job stopped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every accepted submission, in order.
    pub fn submissions(&self) -> Vec<(JobCommand, ExecutionMode)> {
        self.inner.lock().unwrap().submissions.clone()
    }

    /// Commands that changed the job state, in order.
    pub fn effective_commands(&self) -> Vec<JobCommand> {
        self.inner.lock().unwrap().effective.clone()
    }

    /// Current job state as the host sees it.
    pub fn state(&self) -> SyncJobState {
        self.inner.lock().unwrap().state
    }

    /// Cause the next submission to be rejected.
    pub fn fail_next(&self, error: &str) {
        self.inner.lock().unwrap().fail_next = Some(error.to_string());
    }
}

impl JobSupervisor for MockJobSupervisor {
    fn submit(&self, command: JobCommand, mode: ExecutionMode) -> Result<(), HostError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(error) = inner.fail_next.take() {
            return Err(HostError::Rejected(error));
        }

        inner.submissions.push((command, mode));
        let target = command.target_state();
        if inner.state != target {
            inner.state = target;
            inner.effective.push(command);
        }
        Ok(())
    }
}

/// Mock notification service.
#[derive(Debug, Default, Clone)]
pub struct MockNotificationHost {
    inner: Arc<Mutex<MockNotificationHostInner>>,
}

#[derive(Debug, Default)]
struct MockNotificationHostInner {
    channels: BTreeMap<String, NotificationChannelDescriptor>,
    channel_calls: usize,
    slots: BTreeMap<i32, Notification>,
    posted: Vec<(i32, Notification)>,
    fail_next_notify: Option<String>,
}

impl MockNotificationHost {
    /// Create an empty notification host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered channels.
    pub fn channels(&self) -> Vec<NotificationChannelDescriptor> {
        self.inner.lock().unwrap().channels.values().cloned().collect()
    }

    /// Number of `create_channel` calls received.
    pub fn channel_calls(&self) -> usize {
        self.inner.lock().unwrap().channel_calls
    }

    /// Notifications currently visible, by slot.
    pub fn visible(&self) -> Vec<(i32, Notification)> {
        let inner = self.inner.lock().unwrap();
        inner
            .slots
            .iter()
            .map(|(id, n)| (*id, n.clone()))
            .collect()
    }

    /// Notification visible in a slot.
    pub fn slot(&self, id: i32) -> Option<Notification> {
        self.inner.lock().unwrap().slots.get(&id).cloned()
    }

    /// Every notification posted, in order.
    pub fn posted(&self) -> Vec<(i32, Notification)> {
        self.inner.lock().unwrap().posted.clone()
    }

    /// Cause the next `notify` to fail.
    pub fn fail_next_notify(&self, error: &str) {
        self.inner.lock().unwrap().fail_next_notify = Some(error.to_string());
    }
}

impl NotificationHost for MockNotificationHost {
    fn create_channel(&self, channel: &NotificationChannelDescriptor) -> Result<(), HostError> {
        let mut inner = self.inner.lock().unwrap();
        inner.channel_calls += 1;
        inner
            .channels
            .insert(channel.id.clone(), channel.clone());
        Ok(())
    }

    fn notify(&self, id: i32, notification: Notification) -> Result<(), HostError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(error) = inner.fail_next_notify.take() {
            return Err(HostError::Rejected(error));
        }

        inner.posted.push((id, notification.clone()));
        inner.slots.insert(id, notification);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veterinaria_events_types::{NotificationRequest, CHANNEL_ID};

    #[test]
    fn mock_connectivity_counts_queries() {
        let mock = MockConnectivity::online();
        assert!(mock.active_network_capabilities().unwrap().is_some());
        assert!(mock.active_network_info().unwrap().unwrap().connected);
        assert_eq!(mock.capability_queries(), 1);
        assert_eq!(mock.info_queries(), 1);
    }

    #[test]
    fn mock_connectivity_forced_failure() {
        let mock = MockConnectivity::online();
        mock.fail_next("radio off");
        assert!(mock.active_network_capabilities().is_err());
        assert!(mock.active_network_capabilities().is_ok());
    }

    #[test]
    fn mock_supervisor_separates_effective_commands() {
        let mock = MockJobSupervisor::new();
        mock.submit(JobCommand::Start, ExecutionMode::Foreground).unwrap();
        mock.submit(JobCommand::Start, ExecutionMode::Foreground).unwrap();
        mock.submit(JobCommand::Stop, ExecutionMode::Background).unwrap();

        assert_eq!(mock.submissions().len(), 3);
        assert_eq!(
            mock.effective_commands(),
            vec![JobCommand::Start, JobCommand::Stop]
        );
        assert_eq!(mock.state(), SyncJobState::Stopped);
    }

    #[test]
    fn mock_supervisor_rejection_is_not_recorded() {
        let mock = MockJobSupervisor::new();
        mock.fail_next("restricted");
        assert!(mock.submit(JobCommand::Start, ExecutionMode::Foreground).is_err());
        assert!(mock.submissions().is_empty());
        assert_eq!(mock.state(), SyncJobState::Stopped);
    }

    #[test]
    fn mock_notifications_replace_slot() {
        let mock = MockNotificationHost::new();
        let first = Notification::from_request(CHANNEL_ID, NotificationRequest::new("a", "1"));
        let second = Notification::from_request(CHANNEL_ID, NotificationRequest::new("b", "2"));

        mock.notify(7, first).unwrap();
        mock.notify(7, second.clone()).unwrap();

        assert_eq!(mock.visible(), vec![(7, second)]);
        assert_eq!(mock.posted().len(), 2);
    }

    #[test]
    fn clones_share_state() {
        let mock = MockNotificationHost::new();
        let clone = mock.clone();
        clone
            .create_channel(&NotificationChannelDescriptor::system_events())
            .unwrap();
        assert_eq!(mock.channel_calls(), 1);
    }
}
