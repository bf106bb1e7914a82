use std::sync::Mutex;

use serde::Serialize;

use crate::message::StationMessage;
use crate::prelude::ConvertResult;

/// Counts conversion outcomes across many calls.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    /// Sentences recorded, whatever their outcome.
    pub sentences: usize,
    pub tracked_targets: usize,
    pub radar_system_data: usize,
    pub invalid: usize,
    pub ignored: usize,
    pub errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record(&self, outcome: &ConvertResult<Vec<StationMessage>>) {
        let Ok(mut metrics) = self.inner.lock() else {
            return;
        };
        metrics.sentences += 1;
        match outcome {
            Ok(messages) if messages.is_empty() => metrics.ignored += 1,
            Ok(messages) => {
                for message in messages {
                    match message {
                        StationMessage::TrackedTarget(_) => metrics.tracked_targets += 1,
                        StationMessage::RadarSystemData(_) => metrics.radar_system_data += 1,
                        StationMessage::Invalid(_) => metrics.invalid += 1,
                    }
                }
            }
            Err(_) => metrics.errors += 1,
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner
            .lock()
            .map(|metrics| *metrics)
            .unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::InvalidMessage;
    use crate::prelude::ConvertError;

    #[test]
    fn outcomes_are_counted_by_kind() {
        let recorder = MetricsRecorder::new();
        recorder.record(&Ok(Vec::new()));
        recorder.record(&Ok(vec![InvalidMessage::new("bad").into()]));
        recorder.record(&Err(ConvertError::Framing("no '*'".into())));

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.ignored, 1);
        assert_eq!(snapshot.invalid, 1);
        assert_eq!(snapshot.errors, 1);
        assert_eq!(snapshot.tracked_targets, 0);
        assert_eq!(snapshot.sentences, 3);
    }

    #[test]
    fn sentences_count_inputs_not_messages() {
        let recorder = MetricsRecorder::new();
        recorder.record(&Ok(vec![
            InvalidMessage::new("first").into(),
            InvalidMessage::new("second").into(),
        ]));

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.sentences, 1);
        assert_eq!(snapshot.invalid, 2);
    }
}
