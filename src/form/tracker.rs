//! Optimistic submission tracking.

use super::state::SubmissionState;
use crossbeam::channel::{Receiver, Sender, bounded};
use parking_lot::Mutex;
use std::time::Duration;

/// How long a submission may stay unconfirmed before the fallback fires.
pub const FALLBACK_DELAY: Duration = Duration::from_secs(3);

/// Outcome of waiting on one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackDecision {
    /// Confirmation won the race; no fallback.
    Confirmed,
    /// The deadline passed; this watcher must show the fallback.
    FallbackShown,
    /// Another watcher already resolved this submission.
    AlreadyResolved(SubmissionState),
}

/// Tracks one lead submission through its lifecycle.
///
/// `submit` transitions synchronously, before any network outcome is known.
/// `confirm` may arrive from another thread at any time; `wait_for_outcome`
/// resolves the confirmation-vs-deadline race so the fallback fires at most
/// once and a pre-deadline confirmation always cancels it.
pub struct SubmissionTracker {
    state: Mutex<SubmissionState>,
    confirm_tx: Sender<()>,
    confirm_rx: Receiver<()>,
}

impl Default for SubmissionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionTracker {
    pub fn new() -> Self {
        // Capacity one: a single buffered confirmation is enough, duplicates
        // carry no information.
        let (confirm_tx, confirm_rx) = bounded(1);
        Self {
            state: Mutex::new(SubmissionState::Pending),
            confirm_tx,
            confirm_rx,
        }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.lock()
    }

    /// Mark the form as submitted. Effective immediately, not tied to any
    /// confirmation. Returns false for duplicate submits.
    pub fn submit(&self) -> bool {
        let mut state = self.state.lock();
        if *state != SubmissionState::Pending {
            return false;
        }
        *state = SubmissionState::Submitted;
        true
    }

    /// Record the external confirmation signal (the provider answered).
    ///
    /// Only wakes the watcher; the state transition happens in
    /// `wait_for_outcome` so race resolution lives in one place. A
    /// confirmation arriving after the fallback already fired is dropped.
    pub fn confirm(&self) {
        let _ = self.confirm_tx.try_send(());
    }

    /// Block until confirmation arrives or `deadline` elapses.
    pub fn wait_for_outcome(&self, deadline: Duration) -> FallbackDecision {
        let confirmed = self.confirm_rx.recv_timeout(deadline).is_ok();

        let mut state = self.state.lock();
        match *state {
            SubmissionState::Pending | SubmissionState::Submitted => {
                if confirmed {
                    *state = SubmissionState::Confirmed;
                    FallbackDecision::Confirmed
                } else {
                    *state = SubmissionState::FallbackShown;
                    FallbackDecision::FallbackShown
                }
            }
            resolved => FallbackDecision::AlreadyResolved(resolved),
        }
    }
}
