//! Domain range checks for decoded sentences.
//!
//! The diagnostic texts are consumed downstream and must stay verbatim,
//! including the "distance" label on the target-number rule.

use std::ops::RangeInclusive;

use crate::message::InvalidMessage;
use crate::sentence::{RsdSentence, TtmSentence};

/// Range-ring scales supported by the radar display.
pub const DISTANCE_SCALES: [f64; 10] = [0.125, 0.25, 0.5, 1.5, 3.0, 6.0, 12.0, 24.0, 48.0, 96.0];

const TARGET_NUMBER: RangeInclusive<i32> = 1..=50;
const DISTANCE: RangeInclusive<f64> = 0.0..=32.0;
const BEARING: RangeInclusive<f64> = 0.0..=359.9;
const SPEED: RangeInclusive<f64> = 0.0..=90.0;
const COURSE: RangeInclusive<f64> = 0.0..=359.9;

/// Returns the first rule a TTM sentence breaks, checked in the order
/// target number, distance, bearing, speed, course.
pub fn check_ttm(ttm: &TtmSentence<'_>) -> Option<InvalidMessage> {
    if !TARGET_NUMBER.contains(&ttm.target_number) {
        return Some(InvalidMessage::new(format!(
            "TTM message. Wrong distance (01-50): {}",
            ttm.target_number
        )));
    }

    [
        ("distance", DISTANCE, ttm.distance),
        ("bearing", BEARING, ttm.bearing),
        ("speed", SPEED, ttm.speed),
        ("course", COURSE, ttm.course),
    ]
    .into_iter()
    .find(|(_, range, value)| !range.contains(value))
    .map(|(name, range, value)| {
        InvalidMessage::new(format!(
            "TTM message. Wrong {} ({}-{}): {}",
            name,
            format_real(*range.start()),
            format_real(*range.end()),
            format_real(value)
        ))
    })
}

/// Rejects any distance scale outside [`DISTANCE_SCALES`]. Comparison is exact.
pub fn check_rsd(rsd: &RsdSentence<'_>) -> Option<InvalidMessage> {
    if DISTANCE_SCALES.contains(&rsd.distance_scale) {
        return None;
    }
    Some(InvalidMessage::new(format!(
        "RSD message. Wrong distance scale value: {}",
        format_real(rsd.distance_scale)
    )))
}

/// Formats a real the way the radar's diagnostic texts expect: whole
/// numbers keep one fractional digit (`95.0`), very large or very small
/// magnitudes use `d.dE±n` notation.
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e7).contains(&magnitude) {
        let formatted = format!("{:E}", value);
        return match formatted.split_once('E') {
            Some((mantissa, exponent)) if !mantissa.contains('.') => {
                format!("{}.0E{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ttm(
        target_number: i32,
        distance: f64,
        bearing: f64,
        speed: f64,
        course: f64,
    ) -> TtmSentence<'static> {
        TtmSentence {
            target_number,
            distance,
            bearing,
            speed,
            course,
            iff_code: "b",
            status_code: "T",
        }
    }

    #[rstest]
    #[case(95.0, "95.0")]
    #[case(33.88, "33.88")]
    #[case(0.0, "0.0")]
    #[case(-0.0, "-0.0")]
    #[case(359.9, "359.9")]
    #[case(-1.5, "-1.5")]
    #[case(1.0e7, "1.0E7")]
    #[case(1.25e-4, "1.25E-4")]
    #[case(f64::NAN, "NaN")]
    #[case(f64::NEG_INFINITY, "-Infinity")]
    fn format_real_matches_diagnostic_style(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_real(value), expected);
    }

    #[rstest]
    #[case(1, 0.0, 0.0, 0.0, 0.0)]
    #[case(50, 32.0, 359.9, 90.0, 359.9)]
    #[case(23, 13.88, 137.2, 63.8, 94.3)]
    fn ttm_bounds_are_inclusive(
        #[case] target_number: i32,
        #[case] distance: f64,
        #[case] bearing: f64,
        #[case] speed: f64,
        #[case] course: f64,
    ) {
        let sentence = ttm(target_number, distance, bearing, speed, course);
        assert_eq!(check_ttm(&sentence), None);
    }

    #[test]
    fn first_broken_ttm_rule_wins() {
        let invalid = check_ttm(&ttm(0, 40.0, 400.0, 99.0, 400.0)).unwrap();
        assert_eq!(invalid.info_msg, "TTM message. Wrong distance (01-50): 0");

        let invalid = check_ttm(&ttm(1, 13.0, 400.0, 99.0, 400.0)).unwrap();
        assert_eq!(invalid.info_msg, "TTM message. Wrong bearing (0.0-359.9): 400.0");
    }

    #[test]
    fn nan_is_out_of_range() {
        let invalid = check_ttm(&ttm(1, f64::NAN, 0.0, 0.0, 0.0)).unwrap();
        assert_eq!(invalid.info_msg, "TTM message. Wrong distance (0.0-32.0): NaN");
    }

    #[test]
    fn every_listed_distance_scale_is_accepted() {
        for scale in DISTANCE_SCALES {
            let rsd = RsdSentence {
                initial_distance: 0.0,
                initial_bearing: 0.0,
                moving_circle_of_distance: 0.0,
                bearing: 0.0,
                distance_from_ship: 0.0,
                bearing_2: 0.0,
                distance_scale: scale,
                distance_unit: "N",
                display_orientation: "N",
                working_mode: "S",
            };
            assert_eq!(check_rsd(&rsd), None, "scale {}", scale);
        }
    }
}
