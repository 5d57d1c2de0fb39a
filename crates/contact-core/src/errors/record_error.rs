//! Input record errors.

use super::error_code::{self, ContactErrorCode};

/// Errors raised while interpreting raw record fields.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid observation time {value:?}: {reason}")]
    InvalidTime { value: String, reason: String },
}

impl ContactErrorCode for RecordError {
    fn error_code(&self) -> &'static str {
        error_code::RECORD_ERROR
    }
}
