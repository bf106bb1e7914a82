use crate::message::StationMessage;

/// Structural failure of a single conversion call.
///
/// Values that are well formed but out of range are not errors; they come
/// back as [`StationMessage::Invalid`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("malformed sentence framing: {0}")]
    Framing(String),
    #[error("{sentence} sentence has no {name} field (position {index})")]
    MissingField {
        sentence: String,
        name: &'static str,
        index: usize,
    },
    #[error("{sentence} sentence has unparseable {name} field: {value:?}")]
    InvalidField {
        sentence: String,
        name: &'static str,
        value: String,
    },
}

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Turns one raw sentence into zero or more station messages.
///
/// Implementations keep no per-call state, so a single converter can be
/// shared between threads.
pub trait SentenceConverter: Send + Sync {
    fn convert(&self, sentence: &str) -> ConvertResult<Vec<StationMessage>>;
}
