//! In-process job supervisor.
//!
//! Owns the [`SyncJobState`] and the running job task. Commands arrive on an
//! unbounded channel, so `submit` never blocks; a supervisor task applies
//! them in order and publishes every state change on a watch channel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use veterinaria_events_types::{ExecutionMode, JobCommand, SyncJobState};

use super::{HostError, JobSupervisor};

/// How long a stopped job may take to return before it is aborted.
pub const DEFAULT_STOP_TIMEOUT: Duration = Duration::from_secs(5);

/// The background work started by the supervisor.
///
/// `run` should return soon after `stop` resolves. A job still running after
/// the stop timeout is aborted.
#[async_trait]
pub trait SyncJob: Send + Sync + 'static {
    /// Run until stopped.
    async fn run(&self, mode: ExecutionMode, stop: oneshot::Receiver<()>);
}

/// Placeholder sync job: logs a heartbeat at a fixed interval.
#[derive(Debug)]
pub struct HeartbeatJob {
    interval: Duration,
    beats: AtomicU64,
}

impl HeartbeatJob {
    /// Create a job beating at the given interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            beats: AtomicU64::new(0),
        }
    }

    /// Number of heartbeats so far, across all runs.
    pub fn beats(&self) -> u64 {
        self.beats.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SyncJob for HeartbeatJob {
    async fn run(&self, mode: ExecutionMode, mut stop: oneshot::Receiver<()>) {
        tracing::info!(?mode, "sync job running");
        let mut ticker = tokio::time::interval(self.interval);

        loop {
            tokio::select! {
                _ = &mut stop => break,
                _ = ticker.tick() => {
                    let beat = self.beats.fetch_add(1, Ordering::Relaxed) + 1;
                    tracing::debug!(beat, "sync job heartbeat");
                }
            }
        }

        tracing::info!("sync job stopped");
    }
}

struct RunningJob {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

enum SupervisorMsg {
    Command(JobCommand, ExecutionMode),
    Settle(oneshot::Sender<SyncJobState>),
}

/// Job supervisor running the job on the current Tokio runtime.
#[derive(Clone)]
pub struct InProcessSupervisor {
    msg_tx: mpsc::UnboundedSender<SupervisorMsg>,
    state_rx: watch::Receiver<SyncJobState>,
}

impl InProcessSupervisor {
    /// Spawn the supervisor task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(job: Arc<dyn SyncJob>) -> Self {
        Self::spawn_with_stop_timeout(job, DEFAULT_STOP_TIMEOUT)
    }

    /// Spawn the supervisor task with a custom stop timeout.
    pub fn spawn_with_stop_timeout(job: Arc<dyn SyncJob>, stop_timeout: Duration) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SyncJobState::Stopped);

        tokio::spawn(supervise(job, stop_timeout, msg_rx, state_tx));

        Self { msg_tx, state_rx }
    }

    /// Current job state. May lag behind commands still in the queue.
    pub fn state(&self) -> SyncJobState {
        *self.state_rx.borrow()
    }

    /// Watch job state changes.
    pub fn subscribe(&self) -> watch::Receiver<SyncJobState> {
        self.state_rx.clone()
    }

    /// Wait until every command submitted so far has been applied and
    /// return the resulting state.
    pub async fn settled(&self) -> Result<SyncJobState, HostError> {
        let (tx, rx) = oneshot::channel();
        self.msg_tx
            .send(SupervisorMsg::Settle(tx))
            .map_err(|_| shut_down())?;
        rx.await.map_err(|_| shut_down())
    }
}

impl JobSupervisor for InProcessSupervisor {
    fn submit(&self, command: JobCommand, mode: ExecutionMode) -> Result<(), HostError> {
        self.msg_tx
            .send(SupervisorMsg::Command(command, mode))
            .map_err(|_| shut_down())
    }
}

impl std::fmt::Debug for InProcessSupervisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InProcessSupervisor")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

fn shut_down() -> HostError {
    HostError::Unavailable("job supervisor has shut down".into())
}

async fn stop_job(current: RunningJob, timeout: Duration) {
    let RunningJob { stop, mut handle } = current;
    let _ = stop.send(());

    match tokio::time::timeout(timeout, &mut handle).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!("sync job ended abnormally: {}", e),
        Err(_) => {
            tracing::warn!("sync job ignored stop for {:?}, aborting", timeout);
            handle.abort();
        }
    }
}

async fn supervise(
    job: Arc<dyn SyncJob>,
    stop_timeout: Duration,
    mut msg_rx: mpsc::UnboundedReceiver<SupervisorMsg>,
    state_tx: watch::Sender<SyncJobState>,
) {
    let mut running: Option<RunningJob> = None;

    while let Some(msg) = msg_rx.recv().await {
        // A job that returned on its own no longer counts as running.
        if running.as_ref().is_some_and(|r| r.handle.is_finished()) {
            running = None;
            state_tx.send_replace(SyncJobState::Stopped);
        }

        let (command, mode) = match msg {
            SupervisorMsg::Command(command, mode) => (command, mode),
            SupervisorMsg::Settle(resp) => {
                let _ = resp.send(*state_tx.borrow());
                continue;
            }
        };

        match (command, running.take()) {
            (JobCommand::Start, Some(current)) => {
                tracing::debug!("{} ignored: job already running", command);
                running = Some(current);
            }
            (JobCommand::Start, None) => {
                let (stop, stop_rx) = oneshot::channel();
                let job = Arc::clone(&job);
                let handle = tokio::spawn(async move { job.run(mode, stop_rx).await });
                running = Some(RunningJob { stop, handle });
                state_tx.send_replace(SyncJobState::Running);
                tracing::debug!(?mode, "{} applied", command);
            }
            (JobCommand::Stop, Some(current)) => {
                stop_job(current, stop_timeout).await;
                state_tx.send_replace(SyncJobState::Stopped);
                tracing::debug!("{} applied", command);
            }
            (JobCommand::Stop, None) => {
                tracing::debug!("{} ignored: job already stopped", command);
            }
        }
    }

    if let Some(current) = running {
        stop_job(current, stop_timeout).await;
        state_tx.send_replace(SyncJobState::Stopped);
    }
}
