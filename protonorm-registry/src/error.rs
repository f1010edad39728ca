//! Error types for registry operations.

use thiserror::Error;

/// Error from agent registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry is full.
    #[error("Registry is at capacity ({limit} agents)")]
    CapacityExceeded {
        /// The configured agent limit.
        limit: usize,
    },

    /// No agent is registered under the given ID.
    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    /// An agent card failed validation.
    #[error("Invalid agent card: {0}")]
    InvalidCard(String),
}

impl RegistryError {
    /// Create an unknown-agent error.
    pub fn unknown_agent(id: impl Into<String>) -> Self {
        Self::UnknownAgent(id.into())
    }

    /// Create an invalid-card error.
    pub fn invalid_card(msg: impl Into<String>) -> Self {
        Self::InvalidCard(msg.into())
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RegistryError::CapacityExceeded { limit: 10 };
        assert!(err.to_string().contains("10"));

        let err = RegistryError::unknown_agent("ghost");
        assert!(err.to_string().contains("ghost"));

        let err = RegistryError::invalid_card("endpoint must be http(s)");
        assert!(err.to_string().contains("endpoint"));
    }
}
