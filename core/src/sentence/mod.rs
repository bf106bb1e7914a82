//! Field extraction and the position-to-meaning decode of each sentence type.

pub mod fields;
pub mod rsd;
pub mod ttm;

pub use fields::SentenceFields;
pub use rsd::RsdSentence;
pub use ttm::TtmSentence;
