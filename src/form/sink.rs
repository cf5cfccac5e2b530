//! Analytics extension point.

use crate::debug;

/// Receives submission events with their attribution. Inert by default;
/// plug in a real backend by implementing this for your collector.
pub trait EventSink: Send + Sync {
    fn event(&self, name: &str, source: &str, referrer: &str);
}

/// Default sink: no backend, verbose log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn event(&self, name: &str, source: &str, referrer: &str) {
        debug!("form"; "event {name} (source: {source}, referrer: {referrer})");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Collects events for assertion.
    #[derive(Debug, Default)]
    struct RecordingSink {
        events: Mutex<Vec<(String, String, String)>>,
    }

    impl EventSink for RecordingSink {
        fn event(&self, name: &str, source: &str, referrer: &str) {
            self.events
                .lock()
                .push((name.into(), source.into(), referrer.into()));
        }
    }

    #[test]
    fn test_custom_sink_receives_attribution() {
        let sink = RecordingSink::default();
        sink.event("form_submission", "newsletter", "direct");

        let events = sink.events.lock();
        assert_eq!(
            events.as_slice(),
            &[(
                "form_submission".to_string(),
                "newsletter".to_string(),
                "direct".to_string()
            )]
        );
    }

    #[test]
    fn test_noop_sink_is_inert() {
        // Only logs; must not panic without a terminal
        NoopSink.event("form_submission", "direct", "direct");
    }
}
