use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use log::warn;
use searadar::telemetry::{MetricsRecorder, MetricsSnapshot};
use searadar::{Mr2313StationType, SentenceConverter, StationMessage};

#[derive(Debug)]
pub struct WorkflowResult {
    pub messages: Vec<StationMessage>,
    pub metrics: MetricsSnapshot,
}

impl WorkflowResult {
    pub fn summary(&self) -> String {
        format!(
            "sentences={} tracked={} system={} invalid={} ignored={} errors={}",
            self.metrics.sentences,
            self.metrics.tracked_targets,
            self.metrics.radar_system_data,
            self.metrics.invalid,
            self.metrics.ignored,
            self.metrics.errors
        )
    }
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
    station: Mr2313StationType,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self {
            config,
            station: Mr2313StationType,
        }
    }

    /// Frames `feed` into sentence lines and converts each one in order.
    pub fn execute(&self, feed: &str) -> anyhow::Result<WorkflowResult> {
        let converter = self.station.create_converter();
        let metrics = MetricsRecorder::new();
        let mut messages = Vec::new();

        for (index, line) in self.station.frame_lines(feed).enumerate() {
            let outcome = converter.convert(line);
            metrics.record(&outcome);

            match outcome {
                Ok(decoded) => messages.extend(decoded.into_iter().filter(|message| {
                    self.config.emit_invalid || !matches!(message, StationMessage::Invalid(_))
                })),
                Err(err) if self.config.stop_on_error => {
                    return Err(err)
                        .with_context(|| format!("converting sentence {}: {:?}", index + 1, line));
                }
                Err(err) => warn!("skipping sentence {}: {}", index + 1, err),
            }
        }

        Ok(WorkflowResult {
            messages,
            metrics: metrics.snapshot(),
        })
    }
}
