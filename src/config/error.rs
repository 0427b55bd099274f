//! Initialization error types.

use thiserror::Error;

use crate::vector::ParseError;

/// Errors that prevent a scorer from being constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required parameter was absent.
    #[error("missing required parameter: {name}")]
    MissingParam { name: &'static str },

    /// A required parameter was present but empty after trimming.
    #[error("parameter '{name}' must not be empty")]
    EmptyParam { name: &'static str },

    /// A numeric constant could not be interpreted as a finite float.
    #[error("parameter '{name}' is not a finite number: '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    /// The query vector decoded to zero components.
    #[error("input feature vector has no components")]
    EmptyQueryVector,

    /// A query vector component was malformed.
    #[error("invalid input feature vector: {0}")]
    QueryVector(#[from] ParseError),

    /// The parameter bundle could not be decoded at all.
    #[error("failed to decode script parameters: {source}")]
    InvalidParams {
        #[source]
        source: serde_json::Error,
    },
}
