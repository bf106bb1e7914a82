use anyhow::ensure;
use rand::{rngs::StdRng, Rng, SeedableRng};
use searadar::convert::{format_real, DISTANCE_SCALES};
use serde::{Deserialize, Serialize};

use crate::generator::template::sentence;

const IFF_CODES: [&str; 3] = ["b", "p", "d"];
const STATUS_CODES: [&str; 3] = ["L", "Q", "T"];

/// Configuration for generating a synthetic MR-231-3 sentence feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
    pub talker: String,
    /// Share of known sentences that are RSD rather than TTM.
    pub rsd_ratio: f64,
    /// Share of known sentences carrying an out-of-range value.
    pub invalid_ratio: f64,
    /// Share of sentences of a type the converter ignores.
    pub unknown_ratio: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 16,
            seed: 0,
            talker: "RA".to_string(),
            rsd_ratio: 0.2,
            invalid_ratio: 0.1,
            unknown_ratio: 0.05,
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> anyhow::Result<()> {
        for (name, ratio) in [
            ("rsd_ratio", self.rsd_ratio),
            ("invalid_ratio", self.invalid_ratio),
            ("unknown_ratio", self.unknown_ratio),
        ] {
            ensure!(
                (0.0..=1.0).contains(&ratio),
                "{} must lie within 0.0..=1.0, got {}",
                name,
                ratio
            );
        }
        ensure!(
            self.talker.len() == 2,
            "talker must be two characters, got {:?}",
            self.talker
        );
        Ok(())
    }
}

fn ttm_fields(rng: &mut StdRng, invalid: bool) -> Vec<String> {
    let mut target_number = rng.gen_range(1..=50);
    let mut speed: f64 = rng.gen_range(0.0..=90.0);
    if invalid {
        if rng.gen_bool(0.5) {
            target_number = rng.gen_range(51..=99);
        } else {
            speed = rng.gen_range(90.5..=150.0);
        }
    }

    vec![
        "TTM".to_string(),
        format!("{:02}", target_number),
        format!("{:.2}", rng.gen_range(0.0..=32.0)),
        format!("{:.1}", rng.gen_range(0.0..=359.9)),
        "T".to_string(),
        format!("{:.1}", speed),
        format!("{:05.1}", rng.gen_range(0.0..=359.9)),
        "T".to_string(),
        format!("{:.1}", rng.gen_range(0.0..=20.0)),
        format!("{:.1}", rng.gen_range(0.0..=90.0)),
        "N".to_string(),
        IFF_CODES[rng.gen_range(0..IFF_CODES.len())].to_string(),
        STATUS_CODES[rng.gen_range(0..STATUS_CODES.len())].to_string(),
        String::new(),
        format!(
            "{:02}{:02}{:02}",
            rng.gen_range(0..24),
            rng.gen_range(0..60),
            rng.gen_range(0..60)
        ),
        "A".to_string(),
    ]
}

fn rsd_fields(rng: &mut StdRng, invalid: bool) -> Vec<String> {
    let scale = if invalid {
        // Between two supported scales, never equal to either.
        let index = rng.gen_range(0..DISTANCE_SCALES.len() - 1);
        (DISTANCE_SCALES[index] + DISTANCE_SCALES[index + 1]) / 2.0
    } else {
        DISTANCE_SCALES[rng.gen_range(0..DISTANCE_SCALES.len())]
    };

    vec![
        "RSD".to_string(),
        format!("{:.1}", rng.gen_range(0.0..=48.0)),
        format!("{:.1}", rng.gen_range(0.0..=359.9)),
        format!("{:.1}", rng.gen_range(0.0..=48.0)),
        format!("{:.1}", rng.gen_range(0.0..=359.9)),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("{:.1}", rng.gen_range(0.0..=48.0)),
        format!("{:.1}", rng.gen_range(0.0..=359.9)),
        format_real(scale),
        "N".to_string(),
        (if rng.gen_bool(0.5) { "N" } else { "H" }).to_string(),
        "S".to_string(),
    ]
}

/// Own-ship data, a sentence type the converter does not handle.
fn osd_fields(rng: &mut StdRng) -> Vec<String> {
    vec![
        "OSD".to_string(),
        format!("{:.1}", rng.gen_range(0.0..=359.9)),
        "A".to_string(),
        format!("{:.1}", rng.gen_range(0.0..=359.9)),
        "B".to_string(),
        format!("{:.1}", rng.gen_range(0.0..=30.0)),
        "B".to_string(),
        String::new(),
        String::new(),
        "N".to_string(),
    ]
}

pub fn build_sentences_from_config(config: &GeneratorConfig) -> anyhow::Result<Vec<String>> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut sentences = Vec::with_capacity(config.count);

    for _ in 0..config.count {
        let fields = if rng.gen_bool(config.unknown_ratio) {
            osd_fields(&mut rng)
        } else {
            let invalid = rng.gen_bool(config.invalid_ratio);
            if rng.gen_bool(config.rsd_ratio) {
                rsd_fields(&mut rng, invalid)
            } else {
                ttm_fields(&mut rng, invalid)
            }
        };
        sentences.push(sentence(&config.talker, &fields));
    }

    Ok(sentences)
}

pub fn build_sentences(count: usize, seed: u64) -> anyhow::Result<Vec<String>> {
    let config = GeneratorConfig {
        count,
        seed,
        ..Default::default()
    };
    build_sentences_from_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use searadar::{Mr2313Converter, SentenceConverter, StationMessage};

    #[test]
    fn generator_builds_expected_sentence_count() {
        let sentences = build_sentences(32, 7).unwrap();
        assert_eq!(sentences.len(), 32);
        assert!(sentences.iter().all(|s| s.starts_with("$RA")));
    }

    #[test]
    fn generator_is_deterministic_per_seed() {
        assert_eq!(build_sentences(8, 3).unwrap(), build_sentences(8, 3).unwrap());
    }

    #[test]
    fn clean_feed_decodes_without_invalid_messages() {
        let config = GeneratorConfig {
            count: 64,
            seed: 11,
            invalid_ratio: 0.0,
            unknown_ratio: 0.0,
            rsd_ratio: 0.5,
            ..Default::default()
        };
        let converter = Mr2313Converter::new();
        for sentence in build_sentences_from_config(&config).unwrap() {
            let messages = converter.convert(&sentence).unwrap();
            assert_eq!(messages.len(), 1, "{}", sentence);
            assert!(
                !matches!(messages[0], StationMessage::Invalid(_)),
                "{} -> {:?}",
                sentence,
                messages[0]
            );
        }
    }

    #[test]
    fn fully_invalid_feed_decodes_to_invalid_messages() {
        let config = GeneratorConfig {
            count: 32,
            seed: 5,
            invalid_ratio: 1.0,
            unknown_ratio: 0.0,
            ..Default::default()
        };
        let converter = Mr2313Converter::new();
        for sentence in build_sentences_from_config(&config).unwrap() {
            let messages = converter.convert(&sentence).unwrap();
            assert!(matches!(messages[..], [StationMessage::Invalid(_)]), "{}", sentence);
        }
    }

    #[test]
    fn out_of_range_ratio_is_rejected() {
        let config = GeneratorConfig {
            rsd_ratio: 1.5,
            ..Default::default()
        };
        assert!(build_sentences_from_config(&config).is_err());
    }
}
