//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Unknown knowledge source '{0}' (expected one of: primevue, nuxt, both)")]
    UnknownSource(String),

    #[error("Unknown trigger '{0}'")]
    UnknownTrigger(String),

    #[error("Could not extract prompt from output: {0}")]
    MalformedOutput(String),
}

impl DomainError {
    /// Check if this error means the script output broke the delimiter contract
    pub fn is_malformed_output(&self) -> bool {
        matches!(self, DomainError::MalformedOutput(_))
    }
}
