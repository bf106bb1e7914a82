use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Radar display and working state reported by an `RSD` sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSystemDataMessage {
    pub msg_rec_time: DateTime<Utc>,
    pub initial_distance: f64,
    pub initial_bearing: f64,
    pub moving_circle_of_distance: f64,
    pub bearing: f64,
    pub distance_from_ship: f64,
    pub bearing_2: f64,
    /// Range-ring scale; one of the hardware-supported values.
    pub distance_scale: f64,
    pub distance_unit: String,
    pub display_orientation: String,
    pub working_mode: String,
}
