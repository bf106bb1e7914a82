use serde::{Deserialize, Serialize};

/// Emitted in place of a record whose content failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidMessage {
    pub info_msg: String,
}

impl InvalidMessage {
    pub fn new(info_msg: impl Into<String>) -> Self {
        Self {
            info_msg: info_msg.into(),
        }
    }
}
