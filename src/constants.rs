//! Cross-cutting, shared constants.
//!
//! Parameter names mirror the keys the host passes in its script parameter map.

/// Name under which the scoring script is registered with the host.
pub const SCRIPT_NAME: &str = "feature_vector_scoring_script";

/// Plugin identity reported to the host.
pub const PLUGIN_NAME: &str = "feature-vector-scoring";

pub const PLUGIN_DESCRIPTION: &str = "Plugin for Feature Vector Scoring.";

pub const PARAM_FIELD: &str = "field";
pub const PARAM_INPUT_FEATURE_VECTOR: &str = "inputFeatureVector";
pub const PARAM_VERSION: &str = "version";
pub const PARAM_BASE_CONSTANT: &str = "baseConstant";
pub const PARAM_FACTOR_CONSTANT: &str = "factorConstant";

/// `final_score = base_constant + factor_constant * cos(query, doc)`
pub const DEFAULT_BASE_CONSTANT: f64 = 1.0;

pub const DEFAULT_FACTOR_CONSTANT: f64 = 1.0;

/// Separates vector components.
pub const COMPONENT_DELIMITER: char = ',';

/// Separates the version tag from the components: `v2|0.1,0.2`.
pub const VERSION_DELIMITER: char = '|';

/// Returns the prefix a versioned document vector must start with.
pub fn version_prefix(version: &str) -> String {
    let mut prefix = String::with_capacity(version.len() + 1);
    prefix.push_str(version);
    prefix.push(VERSION_DELIMITER);
    prefix
}
