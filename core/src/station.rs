use std::cmp::Reverse;

use crate::convert::Mr2313Converter;

/// Line terminators accepted on the MR-231-3 serial feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDelimiter {
    Unix,
    Crlf,
}

impl LineDelimiter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unix => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

/// Descriptor for the MR-231-3 station type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mr2313StationType;

impl Mr2313StationType {
    pub const STATION_TYPE: &'static str = "МР-231-3";
    pub const CODEC_NAME: &'static str = "mr231-3";
    pub const DELIMITERS: [LineDelimiter; 2] = [LineDelimiter::Unix, LineDelimiter::Crlf];

    pub fn create_converter(&self) -> Mr2313Converter {
        Mr2313Converter::new()
    }

    /// Splits a buffer into sentence lines on any of [`Self::DELIMITERS`],
    /// skipping blank lines. The earliest delimiter wins; on a tie the
    /// longer one does.
    pub fn frame_lines<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let mut rest = text;
        std::iter::from_fn(move || {
            if rest.is_empty() {
                return None;
            }
            let next = Self::DELIMITERS
                .iter()
                .filter_map(|delimiter| {
                    let delimiter = delimiter.as_str();
                    rest.find(delimiter).map(|at| (at, delimiter.len()))
                })
                .min_by_key(|&(at, len)| (at, Reverse(len)));

            let line = match next {
                Some((at, len)) => {
                    let line = &rest[..at];
                    rest = &rest[at + len..];
                    line
                }
                None => std::mem::take(&mut rest),
            };
            Some(line)
        })
        .filter(|line| !line.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::StationMessage;
    use crate::prelude::SentenceConverter;

    #[test]
    fn frame_lines_accepts_both_delimiters() {
        let station = Mr2313StationType;
        let lines: Vec<_> = station
            .frame_lines("$RATTM,1*00\r\n$RARSD,2*00\n\n$RAOSD,3*00")
            .collect();
        assert_eq!(lines, vec!["$RATTM,1*00", "$RARSD,2*00", "$RAOSD,3*00"]);
    }

    #[test]
    fn frame_lines_strips_whole_crlf_only() {
        let station = Mr2313StationType;
        let lines: Vec<_> = station.frame_lines("a\rb\r\nc\r\n").collect();
        assert_eq!(lines, vec!["a\rb", "c"]);
    }

    #[test]
    fn created_converter_decodes_station_feed() {
        let station = Mr2313StationType;
        let converter = station.create_converter();
        let messages = converter
            .convert("$RARSD,36.5,331.4,8.4,320.6,,,,,11.6,185.3,96.0,N,N,S*33")
            .unwrap();
        assert!(matches!(messages[..], [StationMessage::RadarSystemData(_)]));
    }
}
