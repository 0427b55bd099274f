//! Cosine-similarity scoring of per-document feature vectors.
//!
//! `score = base_constant + factor_constant * cos(query, doc)`
//!
//! # Fallback Policy
//!
//! A single malformed or absent document vector must not abort ranking of the
//! whole result set. Every structural anomaly (zero-norm query, missing field,
//! empty value, version mismatch, dimension mismatch, zero-norm document)
//! scores [`base_constant`](crate::config::ScoringConfig::base_constant).
//!
//! The one exception is a component that fails numeric parsing inside a vector
//! that already passed the version and dimension checks: that is returned as
//! [`ScoringError::Parse`] for the document being scored.
//!
//! The cosine is not clamped to `[-1, 1]`; rounding may push it slightly past.

pub mod error;
pub mod scorer;
pub mod types;


pub use error::ScoringError;
pub use scorer::FeatureVectorScorer;
pub use types::{Evaluation, FallbackReason};
