use crate::prelude::ConvertResult;
use crate::sentence::fields::SentenceFields;

const INITIAL_DISTANCE: usize = 1;
const INITIAL_BEARING: usize = 2;
const MOVING_CIRCLE_OF_DISTANCE: usize = 3;
const BEARING: usize = 4;
const DISTANCE_FROM_SHIP: usize = 9;
const BEARING_2: usize = 10;
const DISTANCE_SCALE: usize = 11;
const DISTANCE_UNIT: usize = 12;
const DISPLAY_ORIENTATION: usize = 13;
const WORKING_MODE: usize = 14;

/// Radar System Data fields used by the MR-231-3 converter.
#[derive(Debug, Clone, PartialEq)]
pub struct RsdSentence<'a> {
    pub initial_distance: f64,
    pub initial_bearing: f64,
    pub moving_circle_of_distance: f64,
    pub bearing: f64,
    pub distance_from_ship: f64,
    pub bearing_2: f64,
    pub distance_scale: f64,
    pub distance_unit: &'a str,
    pub display_orientation: &'a str,
    pub working_mode: &'a str,
}

impl<'a> RsdSentence<'a> {
    pub const TYPE: &'static str = "RSD";

    pub fn decode(fields: &SentenceFields<'a>) -> ConvertResult<Self> {
        Ok(Self {
            initial_distance: fields.real(INITIAL_DISTANCE, "initial distance")?,
            initial_bearing: fields.real(INITIAL_BEARING, "initial bearing")?,
            moving_circle_of_distance: fields
                .real(MOVING_CIRCLE_OF_DISTANCE, "moving circle of distance")?,
            bearing: fields.real(BEARING, "bearing")?,
            distance_from_ship: fields.real(DISTANCE_FROM_SHIP, "distance from ship")?,
            bearing_2: fields.real(BEARING_2, "second bearing")?,
            distance_scale: fields.real(DISTANCE_SCALE, "distance scale")?,
            distance_unit: fields.text(DISTANCE_UNIT, "distance unit")?,
            display_orientation: fields.text(DISPLAY_ORIENTATION, "display orientation")?,
            working_mode: fields.text(WORKING_MODE, "working mode")?,
        })
    }
}
