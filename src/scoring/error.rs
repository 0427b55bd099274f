use thiserror::Error;

use crate::vector::ParseError;

/// Fatal evaluation-time failure for a single document.
///
/// Structural problems (missing field, empty value, version or dimension
/// mismatch, zero norms) never surface here; they degrade to the base
/// constant. Only a malformed component in an otherwise well-formed vector
/// does.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("failed to parse document vector in field '{field}': {source}")]
    Parse {
        field: String,
        #[source]
        source: ParseError,
    },
}

impl ScoringError {
    /// The underlying component parse failure.
    pub fn parse_error(&self) -> &ParseError {
        match self {
            ScoringError::Parse { source, .. } => source,
        }
    }
}
