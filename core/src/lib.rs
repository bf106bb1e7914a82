//! Sentence converter for the MR-231-3 marine radar.
//!
//! The radar reports tracked targets (`TTM`) and its own display state
//! (`RSD`) as NMEA-0183 text sentences. This crate turns one sentence into
//! typed records, flagging out-of-range content as [`message::InvalidMessage`]
//! values rather than errors.

pub mod convert;
pub mod message;
pub mod prelude;
pub mod sentence;
pub mod station;
pub mod telemetry;

pub use convert::Mr2313Converter;
pub use message::StationMessage;
pub use prelude::{ConvertError, ConvertResult, SentenceConverter};
pub use station::Mr2313StationType;
