//! Host integration surface.
//!
//! The host registers [`ScriptFactory`] under [`SCRIPT_NAME`], builds one
//! scorer per query from the query's script parameters, and calls
//! [`FeatureVectorScorer::run`] once per candidate document.

pub mod document;


pub use document::DocumentFields;

use crate::config::{ConfigError, ScriptParams};
use crate::constants::{PLUGIN_DESCRIPTION, PLUGIN_NAME, SCRIPT_NAME};
use crate::scoring::{FeatureVectorScorer, ScoringError};

/// Creates scorers from script parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptFactory;

impl ScriptFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn name(&self) -> &'static str {
        SCRIPT_NAME
    }

    pub fn new_script(&self, params: &ScriptParams) -> Result<FeatureVectorScorer, ConfigError> {
        FeatureVectorScorer::from_params(params)
    }

    /// The score does not depend on the host's own relevance score.
    pub fn needs_scores(&self) -> bool {
        false
    }
}

/// Plugin identity plus the factory it contributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureVectorScoringPlugin {
    factory: ScriptFactory,
}

impl FeatureVectorScoringPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn description(&self) -> &'static str {
        PLUGIN_DESCRIPTION
    }

    /// The `(script name, factory)` pair to register with the host.
    pub fn script(&self) -> (&'static str, ScriptFactory) {
        (self.factory.name(), self.factory)
    }
}

/// Builds a scorer and returns it as a plain scoring function.
pub fn scoring_fn(
    params: &ScriptParams,
) -> Result<
    impl Fn(Option<&str>) -> Result<f64, ScoringError> + Send + Sync + use<>,
    ConfigError,
> {
    let scorer = FeatureVectorScorer::from_params(params)?;
    Ok(move |doc_vector: Option<&str>| scorer.calculate_score(doc_vector))
}
