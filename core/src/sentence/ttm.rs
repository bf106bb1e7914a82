use crate::prelude::ConvertResult;
use crate::sentence::fields::SentenceFields;

const TARGET_NUMBER: usize = 1;
const DISTANCE: usize = 2;
const BEARING: usize = 3;
const SPEED: usize = 5;
const COURSE: usize = 6;
const IFF: usize = 11;
const STATUS: usize = 12;

/// Tracked Target Message fields used by the MR-231-3 converter.
///
/// The bearing and course reference letters, CPA/TCPA, units, reference
/// target flag and UTC fields are carried by the radar but not decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct TtmSentence<'a> {
    pub target_number: i32,
    /// Nautical miles.
    pub distance: f64,
    /// Degrees.
    pub bearing: f64,
    /// Knots.
    pub speed: f64,
    /// Degrees.
    pub course: f64,
    pub iff_code: &'a str,
    pub status_code: &'a str,
}

impl<'a> TtmSentence<'a> {
    pub const TYPE: &'static str = "TTM";

    pub fn decode(fields: &SentenceFields<'a>) -> ConvertResult<Self> {
        Ok(Self {
            target_number: fields.integer(TARGET_NUMBER, "target number")?,
            distance: fields.real(DISTANCE, "distance")?,
            bearing: fields.real(BEARING, "bearing")?,
            speed: fields.real(SPEED, "speed")?,
            course: fields.real(COURSE, "course")?,
            iff_code: fields.text(IFF, "IFF")?,
            status_code: fields.text(STATUS, "status")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::ConvertError;

    #[test]
    fn decode_reads_fixed_positions() {
        let fields = SentenceFields::extract(
            "$RATTM,23,13.88,137.2,T,63.8,094.3,T,9.2,79.4,N,b,T,,783344,X*42",
        )
        .unwrap();
        let ttm = TtmSentence::decode(&fields).unwrap();

        assert_eq!(ttm.target_number, 23);
        assert_eq!(ttm.distance, 13.88);
        assert_eq!(ttm.bearing, 137.2);
        assert_eq!(ttm.speed, 63.8);
        assert_eq!(ttm.course, 94.3);
        assert_eq!(ttm.iff_code, "b");
        assert_eq!(ttm.status_code, "T");
    }

    #[test]
    fn decode_fails_on_truncated_sentence() {
        let fields = SentenceFields::extract("$RATTM,23,13.88,137.2,T,63.8,094.3*42").unwrap();
        assert!(matches!(
            TtmSentence::decode(&fields),
            Err(ConvertError::MissingField { index: IFF, .. })
        ));
    }
}
