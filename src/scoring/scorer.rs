use tracing::{Span, debug, error};

use crate::config::{ConfigError, ScoringConfig, ScriptParams};
use crate::constants::version_prefix;
use crate::plugin::DocumentFields;
use crate::vector::{ParseError, QueryVector, parse_component, split_components};

use super::error::ScoringError;
use super::types::{Evaluation, FallbackReason};

/// Scores documents by cosine similarity against a fixed query vector.
///
/// Built once per query execution and immutable afterwards, so a single
/// instance can be shared across threads scoring documents in parallel.
pub struct FeatureVectorScorer {
    config: ScoringConfig,
    query: QueryVector,
    version_prefix: Option<String>,
    span: Span,
}

impl std::fmt::Debug for FeatureVectorScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeatureVectorScorer")
            .field("config", &self.config)
            .field("dimension", &self.query.dimension())
            .field("norm", &self.query.norm())
            .finish()
    }
}

impl FeatureVectorScorer {
    /// Creates a scorer that logs inside its own `feature_vector_scoring` span.
    pub fn new(config: ScoringConfig, query: QueryVector) -> Self {
        let span = tracing::debug_span!(
            "feature_vector_scoring",
            field = %config.field,
            version = ?config.version
        );
        Self::with_span(config, query, span)
    }

    /// Creates a scorer whose diagnostics are emitted inside `span`.
    pub fn with_span(config: ScoringConfig, query: QueryVector, span: Span) -> Self {
        let version_prefix = config.version.as_deref().map(version_prefix);

        span.in_scope(|| {
            debug!(
                version = ?config.version,
                norm = query.norm(),
                dimension = query.dimension(),
                base_constant = config.base_constant,
                factor_constant = config.factor_constant,
                "Feature vector scorer initialized"
            );
        });

        Self {
            config,
            query,
            version_prefix,
            span,
        }
    }

    /// Validates host parameters and builds the scorer.
    ///
    /// Fails if `field` or `inputFeatureVector` is missing or blank, if the
    /// query vector has a malformed component, or if it has no components.
    pub fn from_params(params: &ScriptParams) -> Result<Self, ConfigError> {
        let config = ScoringConfig::from_params(params)?;
        let query = QueryVector::parse(params.required_input_feature_vector()?)?;

        if query.dimension() == 0 {
            return Err(ConfigError::EmptyQueryVector);
        }

        Ok(Self::new(config, query))
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn query(&self) -> &QueryVector {
        &self.query
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Scores one encoded document vector; `None` means the value is absent.
    pub fn calculate_score(&self, doc_vector: Option<&str>) -> Result<f64, ScoringError> {
        self.evaluate(doc_vector).map(|e| e.score())
    }

    /// Like [`calculate_score`](Self::calculate_score), but reports why.
    pub fn evaluate(&self, doc_vector: Option<&str>) -> Result<Evaluation, ScoringError> {
        if self.query.is_zero() {
            return Ok(self.fallback(FallbackReason::ZeroNormQuery));
        }

        let encoded = match doc_vector.map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => return Ok(self.fallback(FallbackReason::EmptyValue)),
        };

        let body = match &self.version_prefix {
            Some(prefix) => match encoded.strip_prefix(prefix.as_str()) {
                Some(rest) => rest,
                None => return Ok(self.fallback(FallbackReason::VersionMismatch)),
            },
            None => encoded,
        };

        let tokens = split_components(body);
        let dimension = self.query.dimension();
        if tokens.len() != dimension {
            return Ok(self.fallback(FallbackReason::DimensionMismatch {
                expected: dimension,
                actual: tokens.len(),
            }));
        }

        let (dot, doc_sum_sq) = self
            .accumulate(&tokens)
            .map_err(|source| ScoringError::Parse {
                field: self.config.field.clone(),
                source,
            })?;

        if doc_sum_sq == 0.0 {
            return Ok(self.fallback(FallbackReason::ZeroNormDocument));
        }

        let cosine = dot / (doc_sum_sq.sqrt() * self.query.scaled_norm());

        Ok(Evaluation::Scored {
            cosine,
            score: self.config.affine(cosine),
        })
    }

    /// Host entry point: fetches the configured field from `doc` and scores it.
    ///
    /// A missing field is logged at error level and scores the base constant.
    pub fn run<D: DocumentFields + ?Sized>(&self, doc: &D) -> Result<f64, ScoringError> {
        self.evaluate_document(doc).map(|e| e.score())
    }

    pub fn evaluate_document<D: DocumentFields + ?Sized>(
        &self,
        doc: &D,
    ) -> Result<Evaluation, ScoringError> {
        if self.query.is_zero() {
            return Ok(self.fallback(FallbackReason::ZeroNormQuery));
        }

        match doc.field_value(&self.config.field) {
            Some(value) => self.evaluate(Some(value)),
            None => {
                self.span.in_scope(|| {
                    error!(field = %self.config.field, "cannot find field");
                });
                Ok(self.fallback(FallbackReason::MissingField))
            }
        }
    }

    /// Parses the document components and returns `(dot, sum_sq)` in scaled
    /// form: both the document and the query are divided by their largest
    /// magnitude. The scales cancel in the cosine, and no square can overflow.
    fn accumulate(&self, tokens: &[&str]) -> Result<(f64, f64), ParseError> {
        let mut scale = 0.0f64;
        let mut dot = 0.0f64;
        let mut sum_sq = 0.0f64;

        for (index, (token, &q)) in tokens
            .iter()
            .zip(self.query.scaled_components())
            .enumerate()
        {
            let v = parse_component(index, token)?;
            let magnitude = v.abs();
            if magnitude == 0.0 {
                continue;
            }

            if magnitude > scale {
                let ratio = scale / magnitude;
                sum_sq = sum_sq * ratio * ratio + 1.0;
                dot = dot * ratio + v.signum() * q;
                scale = magnitude;
            } else {
                let x = v / scale;
                sum_sq += x * x;
                dot += x * q;
            }
        }

        Ok((dot, sum_sq))
    }

    #[inline]
    fn fallback(&self, reason: FallbackReason) -> Evaluation {
        Evaluation::Fallback {
            reason,
            score: self.config.base_constant,
        }
    }
}
