use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tracking state of a target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetStatus {
    Lost,
    #[default]
    UnreliableData,
    Tracked,
}

impl TargetStatus {
    /// Maps the TTM status letter; unknown letters read as unreliable data.
    pub fn from_code(code: &str) -> Self {
        match code {
            "L" => Self::Lost,
            "Q" => Self::UnreliableData,
            "T" => Self::Tracked,
            _ => Self::default(),
        }
    }
}

/// Identification friend or foe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Iff {
    Friend,
    Foe,
    #[default]
    Unknown,
}

impl Iff {
    /// Maps the MR-231-3 IFF letter carried in the TTM target-name field.
    pub fn from_code(code: &str) -> Self {
        match code {
            "b" => Self::Friend,
            "p" => Self::Foe,
            "d" => Self::Unknown,
            _ => Self::default(),
        }
    }
}

/// Kind of target. The MR-231-3 feed never carries one, so every target is
/// reported as `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetType {
    #[default]
    Unknown,
}

/// Target track reported by a `TTM` sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedTargetMessage {
    /// Receipt time as Unix epoch milliseconds.
    pub msg_time: i64,
    pub msg_rec_time: DateTime<Utc>,
    pub target_number: i32,
    /// Nautical miles.
    pub distance: f64,
    /// Degrees.
    pub bearing: f64,
    /// Degrees.
    pub course: f64,
    /// Knots.
    pub speed: f64,
    pub status: TargetStatus,
    pub iff: Iff,
    #[serde(rename = "type")]
    pub target_type: TargetType,
}
