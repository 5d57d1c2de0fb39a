//! Composed graph errors.

use super::error_code::{self, ContactErrorCode};

/// Errors raised while mutating the composed population graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("visit {visit} is not present in the composed graph")]
    UnknownVisit { visit: String },

    #[error("conflicting breach evidence between {first} and {second}: {details}")]
    ConflictingBreach {
        first: String,
        second: String,
        details: String,
    },
}

impl ContactErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_ERROR
    }
}
