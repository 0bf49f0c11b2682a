use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Condvar, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use folio_application::{
    ApplicationError, ContactTransport, SubmissionOutcome, SubmissionResult,
};
use folio_domain::ContactMessage;
use tracing::debug;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Decides how a simulated submission ends.
pub trait SubmissionPolicy: Send + Sync {
    fn decide(&self, message: &ContactMessage) -> SubmissionResult;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysSucceed;

impl SubmissionPolicy for AlwaysSucceed {
    fn decide(&self, _message: &ContactMessage) -> SubmissionResult {
        SubmissionResult::Sent
    }
}

#[derive(Debug, Clone)]
pub struct AlwaysFail(pub String);

impl SubmissionPolicy for AlwaysFail {
    fn decide(&self, _message: &ContactMessage) -> SubmissionResult {
        SubmissionResult::Failed(self.0.clone())
    }
}

#[derive(Debug)]
struct ScheduledSubmission {
    sequence: u64,
    message: ContactMessage,
}

/// Highest canceled sequence, with a condvar so a pending wait wakes up as
/// soon as its submission is canceled.
#[derive(Debug, Default)]
struct CancelMarker {
    canceled_through: Mutex<u64>,
    changed: Condvar,
}

impl CancelMarker {
    fn cancel(&self, sequence: u64) {
        let mut canceled = self
            .canceled_through
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *canceled = (*canceled).max(sequence);
        self.changed.notify_all();
    }

    fn is_canceled(&self, sequence: u64) -> bool {
        let canceled = self
            .canceled_through
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        sequence <= *canceled
    }

    /// Waits out `delay` unless `sequence` gets canceled first. Returns `true`
    /// when the full delay elapsed.
    fn wait_unless_canceled(&self, sequence: u64, delay: Duration) -> bool {
        let deadline = Instant::now() + delay;
        let mut canceled = self
            .canceled_through
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        loop {
            if sequence <= *canceled {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            canceled = self
                .changed
                .wait_timeout(canceled, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }
}

/// Stand-in for a real mail endpoint: every submission is answered by a
/// background worker after a fixed delay.
pub struct SimulatedContactTransport {
    next_sequence: AtomicU64,
    cancel: Arc<CancelMarker>,
    submit_tx: mpsc::Sender<ScheduledSubmission>,
    result_rx: Mutex<mpsc::Receiver<SubmissionOutcome>>,
}

impl SimulatedContactTransport {
    pub fn new(delay: Duration) -> Self {
        Self::with_policy(delay, Arc::new(AlwaysSucceed))
    }

    pub fn with_policy(delay: Duration, policy: Arc<dyn SubmissionPolicy>) -> Self {
        let (submit_tx, submit_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let cancel = Arc::new(CancelMarker::default());

        spawn_worker(
            submit_rx,
            result_tx,
            Arc::clone(&cancel),
            delay,
            policy,
        );

        Self {
            next_sequence: AtomicU64::new(0),
            cancel,
            submit_tx,
            result_rx: Mutex::new(result_rx),
        }
    }
}

impl Default for SimulatedContactTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl ContactTransport for SimulatedContactTransport {
    fn submit(&self, message: ContactMessage) -> Result<u64, ApplicationError> {
        let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst) + 1;
        self.submit_tx
            .send(ScheduledSubmission { sequence, message })
            .map_err(|error| {
                ApplicationError::Submission(format!("contact worker unavailable: {error}"))
            })?;
        Ok(sequence)
    }

    fn poll(&self) -> Result<Option<SubmissionOutcome>, ApplicationError> {
        let receiver = self.result_rx.lock().map_err(|_| {
            ApplicationError::Submission("contact result channel poisoned".to_string())
        })?;
        match receiver.try_recv() {
            Ok(outcome) => Ok(Some(outcome)),
            Err(mpsc::TryRecvError::Empty) => Ok(None),
            Err(mpsc::TryRecvError::Disconnected) => Err(ApplicationError::Submission(
                "contact worker stopped".to_string(),
            )),
        }
    }

    fn cancel(&self, sequence: u64) -> Result<(), ApplicationError> {
        self.cancel.cancel(sequence);
        Ok(())
    }
}

fn spawn_worker(
    submit_rx: mpsc::Receiver<ScheduledSubmission>,
    result_tx: mpsc::Sender<SubmissionOutcome>,
    cancel: Arc<CancelMarker>,
    delay: Duration,
    policy: Arc<dyn SubmissionPolicy>,
) {
    thread::spawn(move || {
        while let Ok(job) = submit_rx.recv() {
            if cancel.is_canceled(job.sequence) {
                debug!(sequence = job.sequence, "skipping canceled submission");
                continue;
            }

            if !cancel.wait_unless_canceled(job.sequence, delay) {
                debug!(sequence = job.sequence, "submission canceled while pending");
                continue;
            }

            let outcome = SubmissionOutcome {
                sequence: job.sequence,
                result: policy.decide(&job.message),
            };
            if result_tx.send(outcome).is_err() {
                return;
            }
        }
    });
}
