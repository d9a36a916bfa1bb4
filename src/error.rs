//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating-engine scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("Participant not found in rating snapshot: {participant_id}")]
    ParticipantNotFound { participant_id: String },

    #[error("Record {record_index} is missing required field '{field}'")]
    MissingField { field: String, record_index: usize },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
