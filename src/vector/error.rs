use thiserror::Error;

/// A vector component that is not a finite decimal float.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Token could not be parsed as a float.
    #[error("invalid vector component at index {index}: '{token}': {source}")]
    InvalidComponent {
        /// Zero-based component index.
        index: usize,
        /// Trimmed token text.
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Token parsed, but to NaN or an infinity.
    #[error("non-finite vector component at index {index}: '{token}'")]
    NonFinite {
        /// Zero-based component index.
        index: usize,
        /// Trimmed token text.
        token: String,
    },
}

impl ParseError {
    /// Index of the offending component.
    pub fn index(&self) -> usize {
        match self {
            ParseError::InvalidComponent { index, .. } | ParseError::NonFinite { index, .. } => {
                *index
            }
        }
    }

    /// The offending token, trimmed.
    pub fn token(&self) -> &str {
        match self {
            ParseError::InvalidComponent { token, .. } | ParseError::NonFinite { token, .. } => {
                token
            }
        }
    }
}
