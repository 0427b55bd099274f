//! Delimited feature-vector decoding.
//!
//! Vectors travel as comma-separated decimal floats, optionally prefixed with a
//! version tag (`v2|0.5,1.0,0.25`). The version prefix is handled by the scorer;
//! this module only deals with the component list.

pub mod error;


pub use error::ParseError;

use crate::constants::COMPONENT_DELIMITER;

/// Splits an encoded vector into raw (untrimmed) component tokens.
///
/// A string without a delimiter is a single token, even when empty. Otherwise
/// trailing zero-length tokens are dropped, so `"1,2,"` yields two tokens and
/// `","` yields none. Interior empty tokens are kept and fail parsing later.
pub fn split_components(encoded: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = encoded.split(COMPONENT_DELIMITER).collect();
    if tokens.len() > 1 {
        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
    }
    tokens
}

/// Parses a single component token after trimming surrounding whitespace.
#[inline]
pub fn parse_component(index: usize, token: &str) -> Result<f64, ParseError> {
    let token = token.trim();
    let value: f64 = token.parse().map_err(|e| ParseError::InvalidComponent {
        index,
        token: token.to_string(),
        source: e,
    })?;

    if !value.is_finite() {
        return Err(ParseError::NonFinite {
            index,
            token: token.to_string(),
        });
    }

    Ok(value)
}

/// The query-side feature vector with its precomputed Euclidean norm.
///
/// Immutable after construction; `dimension` and `norm` are never recomputed.
/// Components are also kept divided by the largest magnitude so that norms
/// and dot products of large finite values do not overflow.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryVector {
    components: Vec<f64>,
    scale: f64,
    scaled: Vec<f64>,
    scaled_norm: f64,
}

impl QueryVector {
    /// Builds a query vector from already-parsed components.
    pub fn new(components: Vec<f64>) -> Self {
        let scale = components.iter().fold(0.0f64, |m, v| m.max(v.abs()));
        let scaled: Vec<f64> = if scale == 0.0 {
            vec![0.0; components.len()]
        } else {
            components.iter().map(|v| v / scale).collect()
        };
        let scaled_norm = scaled.iter().map(|v| v * v).sum::<f64>().sqrt();

        Self {
            components,
            scale,
            scaled,
            scaled_norm,
        }
    }

    /// Decodes a comma-separated list of floats.
    ///
    /// Each component is trimmed on its own. Returns the first malformed
    /// component as an error; an input with no components decodes to an
    /// empty vector.
    pub fn parse(encoded: &str) -> Result<Self, ParseError> {
        let components = split_components(encoded)
            .into_iter()
            .enumerate()
            .map(|(index, token)| parse_component(index, token))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(components))
    }

    pub fn components(&self) -> &[f64] {
        &self.components
    }

    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// `sqrt(Σ components[i]²)`.
    pub fn norm(&self) -> f64 {
        self.scale * self.scaled_norm
    }

    /// Cosine similarity is undefined against a zero vector.
    pub fn is_zero(&self) -> bool {
        self.scale == 0.0
    }

    /// Components divided by the largest magnitude, all within `[-1, 1]`.
    pub fn scaled_components(&self) -> &[f64] {
        &self.scaled
    }

    /// Norm of [`scaled_components`](Self::scaled_components).
    pub fn scaled_norm(&self) -> f64 {
        self.scaled_norm
    }
}

impl std::str::FromStr for QueryVector {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
