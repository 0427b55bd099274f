//! Feature-vector relevance scoring for search results.
//!
//! A scorer is built once per query from the host's script parameters and
//! then evaluated once per candidate document:
//!
//! ```
//! use fvscore::{FeatureVectorScorer, ScriptParams};
//!
//! let params = ScriptParams::new("feature_vector", "1.0,0.0").with_version("v2");
//! let scorer = FeatureVectorScorer::from_params(&params)?;
//!
//! assert_eq!(scorer.calculate_score(Some("v2|1,0"))?, 2.0);
//! assert_eq!(scorer.calculate_score(Some("v1|1,0"))?, 1.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Public API Surface
//!
//! - [`ScriptParams`], [`ScoringConfig`], [`ConfigError`] - Initialization
//! - [`QueryVector`], [`ParseError`] - Vector decoding
//! - [`FeatureVectorScorer`], [`Evaluation`], [`FallbackReason`], [`ScoringError`] - Scoring
//! - [`ScriptFactory`], [`DocumentFields`], [`scoring_fn`] - Host integration
//!
//! Logging goes through `tracing`; installing a subscriber is left to the host.

pub mod config;
pub mod constants;
pub mod plugin;
pub mod scoring;
pub mod vector;

pub use config::{ConfigError, NumericParam, ScoringConfig, ScriptParams};
pub use constants::{
    DEFAULT_BASE_CONSTANT, DEFAULT_FACTOR_CONSTANT, PLUGIN_DESCRIPTION, PLUGIN_NAME, SCRIPT_NAME,
};
pub use plugin::{DocumentFields, FeatureVectorScoringPlugin, ScriptFactory, scoring_fn};
pub use scoring::{Evaluation, FallbackReason, FeatureVectorScorer, ScoringError};
pub use vector::{ParseError, QueryVector, parse_component, split_components};
