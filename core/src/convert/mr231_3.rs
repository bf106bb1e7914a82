use chrono::{DateTime, Utc};

use crate::convert::validate::{check_rsd, check_ttm};
use crate::message::{
    Iff, RadarSystemDataMessage, StationMessage, TargetStatus, TargetType, TrackedTargetMessage,
};
use crate::prelude::{ConvertResult, SentenceConverter};
use crate::sentence::{RsdSentence, SentenceFields, TtmSentence};
use crate::telemetry::log::LogManager;

/// Converter for the TTM and RSD sentences of the MR-231-3 radar.
///
/// Other sentence types are ignored and produce no message.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mr2313Converter {
    logger: LogManager,
}

impl Mr2313Converter {
    pub fn new() -> Self {
        Self {
            logger: LogManager::new(),
        }
    }

    /// Converts `sentence`, stamping every record with `received`.
    pub fn convert_at(
        &self,
        sentence: &str,
        received: DateTime<Utc>,
    ) -> ConvertResult<Vec<StationMessage>> {
        let fields = SentenceFields::extract(sentence)?;

        let message = match fields.kind() {
            TtmSentence::TYPE => self.tracked_target(&fields, received)?,
            RsdSentence::TYPE => self.radar_system_data(&fields, received)?,
            other => {
                self.logger.ignored(other);
                return Ok(Vec::new());
            }
        };

        Ok(vec![message])
    }

    fn tracked_target(
        &self,
        fields: &SentenceFields<'_>,
        received: DateTime<Utc>,
    ) -> ConvertResult<StationMessage> {
        let ttm = TtmSentence::decode(fields)?;
        if let Some(invalid) = check_ttm(&ttm) {
            self.logger.invalid(&invalid);
            return Ok(invalid.into());
        }

        Ok(TrackedTargetMessage {
            msg_time: received.timestamp_millis(),
            msg_rec_time: received,
            target_number: ttm.target_number,
            distance: ttm.distance,
            bearing: ttm.bearing,
            course: ttm.course,
            speed: ttm.speed,
            status: TargetStatus::from_code(ttm.status_code),
            iff: Iff::from_code(ttm.iff_code),
            target_type: TargetType::Unknown,
        }
        .into())
    }

    fn radar_system_data(
        &self,
        fields: &SentenceFields<'_>,
        received: DateTime<Utc>,
    ) -> ConvertResult<StationMessage> {
        let rsd = RsdSentence::decode(fields)?;
        if let Some(invalid) = check_rsd(&rsd) {
            self.logger.invalid(&invalid);
            return Ok(invalid.into());
        }

        Ok(RadarSystemDataMessage {
            msg_rec_time: received,
            initial_distance: rsd.initial_distance,
            initial_bearing: rsd.initial_bearing,
            moving_circle_of_distance: rsd.moving_circle_of_distance,
            bearing: rsd.bearing,
            distance_from_ship: rsd.distance_from_ship,
            bearing_2: rsd.bearing_2,
            distance_scale: rsd.distance_scale,
            distance_unit: rsd.distance_unit.to_string(),
            display_orientation: rsd.display_orientation.to_string(),
            working_mode: rsd.working_mode.to_string(),
        }
        .into())
    }
}

impl SentenceConverter for Mr2313Converter {
    fn convert(&self, sentence: &str) -> ConvertResult<Vec<StationMessage>> {
        self.convert_at(sentence, Utc::now())
    }
}
