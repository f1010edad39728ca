//! Error types for envelope handling.
//!
//! The normalization entry point itself is total and never returns an
//! error; the errors here cover the one fallible edge of this crate,
//! parsing an envelope from wire JSON.

use thiserror::Error;

/// Error while building or parsing a [`crate::ResponseEnvelope`].
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The envelope JSON could not be deserialized.
    #[error("Failed to parse envelope JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The envelope is missing a required field.
    #[error("Envelope is missing required field: {0}")]
    MissingField(String),

    /// Custom envelope error.
    #[error("Envelope error: {0}")]
    Custom(String),
}

impl EnvelopeError {
    /// Create a custom envelope error.
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create a missing-field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }
}

/// Result type for envelope handling.
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;

/// Parse a [`crate::ResponseEnvelope`] from a JSON string.
///
/// # Errors
///
/// Returns [`EnvelopeError::JsonParse`] when the input is not valid
/// envelope JSON.
pub fn envelope_from_str(json: &str) -> EnvelopeResult<crate::ResponseEnvelope> {
    Ok(serde_json::from_str(json)?)
}
