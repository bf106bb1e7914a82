//! Records emitted by the converter.

pub mod invalid;
pub mod system;
pub mod target;

pub use invalid::InvalidMessage;
pub use system::RadarSystemDataMessage;
pub use target::{Iff, TargetStatus, TargetType, TrackedTargetMessage};

use serde::{Deserialize, Serialize};

/// One decoded station message. Consumers branch on the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StationMessage {
    TrackedTarget(TrackedTargetMessage),
    RadarSystemData(RadarSystemDataMessage),
    Invalid(InvalidMessage),
}

impl StationMessage {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<TrackedTargetMessage> for StationMessage {
    fn from(message: TrackedTargetMessage) -> Self {
        Self::TrackedTarget(message)
    }
}

impl From<RadarSystemDataMessage> for StationMessage {
    fn from(message: RadarSystemDataMessage) -> Self {
        Self::RadarSystemData(message)
    }
}

impl From<InvalidMessage> for StationMessage {
    fn from(message: InvalidMessage) -> Self {
        Self::Invalid(message)
    }
}
