//! Lead form runtime: submission state machine and analytics hook.
//!
//! The render half of the form (action, field names, hidden inputs) lives in
//! `populate`; this module owns what happens after a submit.

mod sink;
mod state;
mod tracker;

pub use sink::{EventSink, NoopSink};
pub use state::SubmissionState;
pub use tracker::{FALLBACK_DELAY, FallbackDecision, SubmissionTracker};
