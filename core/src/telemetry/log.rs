use log::{debug, warn};

use crate::message::InvalidMessage;

/// Log sink for conversion outcomes that are not returned as errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn ignored(&self, kind: &str) {
        debug!("ignoring {:?} sentence", kind);
    }

    pub fn invalid(&self, message: &InvalidMessage) {
        warn!("{}", message.info_msg);
    }
}
