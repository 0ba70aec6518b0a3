//! # Learner Resolution Error Types
//!
//! Structured error handling for the resolution core using thiserror
//! instead of `Box<dyn Error>` patterns. Callers distinguish invalid input,
//! not-found outcomes, and collaborator faults by variant rather than by
//! matching on message text.

use thiserror::Error;

/// Error kinds produced while resolving a learner
#[derive(Error, Debug)]
pub enum LearnerResolutionError {
    /// Caller supplied a non-positive learner ID. Surfaced verbatim,
    /// never wrapped into `RetrievalFailed`.
    #[error("Learner ID must be a positive integer.")]
    InvalidLearnerId { learner_id: i64 },

    /// No store produced a usable learner. Always wrapped into
    /// `RetrievalFailed` before reaching the caller.
    #[error("{message}")]
    NotFound { message: String },

    /// A collaborator fault or missing data reported by an injected store.
    #[error("{message}")]
    Store { message: String },

    /// A configuration value was missing or unparseable.
    #[error("Configuration error: {key}: {message}")]
    Configuration { key: String, message: String },

    /// Wraps any fault raised during failover health evaluation.
    #[error("An error occurred while checking the failover mode: {message}")]
    FailoverCheckFailed {
        message: String,
        #[source]
        source: Box<LearnerResolutionError>,
    },

    /// The single externally-visible failure kind for anything beyond
    /// invalid input: missing data, configuration errors, or health-check
    /// faults.
    #[error("An error occurred while retrieving the learner: {message}")]
    RetrievalFailed {
        message: String,
        #[source]
        source: Box<LearnerResolutionError>,
    },
}

impl LearnerResolutionError {
    /// Create an invalid learner ID error
    pub fn invalid_learner_id(learner_id: i64) -> Self {
        Self::InvalidLearnerId { learner_id }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a collaborator fault
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create a configuration error for a specific key
    pub fn configuration(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Wrap a fault raised during failover health evaluation, capturing the
    /// cause's full display as the wrapped message
    pub fn failover_check_failed(source: LearnerResolutionError) -> Self {
        Self::FailoverCheckFailed {
            message: source.to_string(),
            source: Box::new(source),
        }
    }

    /// Wrap a fault raised during learner retrieval, capturing the cause's
    /// full display as the wrapped message
    pub fn retrieval_failed(source: LearnerResolutionError) -> Self {
        Self::RetrievalFailed {
            message: source.to_string(),
            source: Box::new(source),
        }
    }
}

/// Result type alias for resolution operations
pub type ResolutionResult<T> = Result<T, LearnerResolutionError>;
