/// Why a document received the base constant instead of a cosine score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The query vector has zero norm; permanent for the scorer instance.
    ZeroNormQuery,
    /// The document has no value for the configured field.
    MissingField,
    /// The value was absent, empty, or whitespace-only.
    EmptyValue,
    /// A version tag is configured and the value does not carry it.
    VersionMismatch,
    /// Component count differs from the query dimension.
    DimensionMismatch { expected: usize, actual: usize },
    /// Every document component is zero.
    ZeroNormDocument,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::ZeroNormQuery => "ZERO_NORM_QUERY",
            FallbackReason::MissingField => "MISSING_FIELD",
            FallbackReason::EmptyValue => "EMPTY_VALUE",
            FallbackReason::VersionMismatch => "VERSION_MISMATCH",
            FallbackReason::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            FallbackReason::ZeroNormDocument => "ZERO_NORM_DOCUMENT",
        }
    }
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::DimensionMismatch { expected, actual } => {
                write!(f, "{} (expected: {}, actual: {})", self.as_str(), expected, actual)
            }
            _ => f.write_str(self.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Outcome of scoring one document.
pub enum Evaluation {
    /// Cosine similarity was computed.
    Scored {
        /// Raw cosine similarity (not clamped).
        cosine: f64,
        /// `base_constant + factor_constant * cosine`.
        score: f64,
    },
    /// The document degraded to the base constant.
    Fallback {
        reason: FallbackReason,
        /// Always the base constant.
        score: f64,
    },
}

impl Evaluation {
    /// The final score handed to the ranking pipeline.
    pub fn score(&self) -> f64 {
        match self {
            Evaluation::Scored { score, .. } | Evaluation::Fallback { score, .. } => *score,
        }
    }

    /// Returns the cosine similarity (if one was computed).
    pub fn cosine(&self) -> Option<f64> {
        match self {
            Evaluation::Scored { cosine, .. } => Some(*cosine),
            Evaluation::Fallback { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Evaluation::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            Evaluation::Fallback { reason, .. } => Some(*reason),
            Evaluation::Scored { .. } => None,
        }
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evaluation::Scored { cosine, score } => {
                write!(f, "SCORED (cosine: {:.4}, score: {:.4})", cosine, score)
            }
            Evaluation::Fallback { reason, score } => {
                write!(f, "FALLBACK {} (score: {:.4})", reason, score)
            }
        }
    }
}
