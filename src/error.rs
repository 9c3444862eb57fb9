//! Error types for scoring and loading questionnaires

use thiserror::Error;

/// Errors raised while scoring a response or loading a questionnaire
#[derive(Debug, Error)]
pub enum Error {
    /// The `responses` payload was not valid JSON or not a JSON object
    #[error("responses payload is not a JSON object: {0}")]
    MalformedResponses(#[source] serde_json::Error),
    /// A questionnaire definition could not be parsed
    #[error("questionnaire definition is not valid JSON: {0}")]
    MalformedDefinition(#[source] serde_json::Error),
    /// The `responses` payload has no entry for the expected slot
    #[error("responses payload has no `{0}` slot")]
    MissingSlot(&'static str),
    /// The selection stored in the slot is not an integer
    #[error("selection in `{slot}` is not an integer: {value}")]
    NonIntegerSelection {
        /// Slot that held the selection
        slot: &'static str,
        /// The value found instead
        value: serde_json::Value,
    },
    /// Coding the selection would overflow the score type
    #[error("selection {index} cannot be coded without overflow")]
    SelectionOutOfRange {
        /// The selected index that was read
        index: i64,
    },
    /// A questionnaire definition failed validation
    #[error("invalid questionnaire: {0}")]
    Invalid(#[from] garde::Report),
}

/// Result alias used across the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;
