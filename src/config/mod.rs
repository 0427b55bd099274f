//! Script parameters and validated scoring constants.
//!
//! The host hands the scorer a map of named values. [`ScriptParams`] is the
//! typed form of that map; [`ScoringConfig`] is what survives validation.

pub mod error;


pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{
    DEFAULT_BASE_CONSTANT, DEFAULT_FACTOR_CONSTANT, PARAM_BASE_CONSTANT, PARAM_FACTOR_CONSTANT,
    PARAM_FIELD, PARAM_INPUT_FEATURE_VECTOR,
};

/// A numeric parameter as the host may send it: a number or numeric text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericParam {
    Number(f64),
    Text(String),
}

impl NumericParam {
    fn resolve(&self, name: &'static str) -> Result<f64, ConfigError> {
        let value = match self {
            NumericParam::Number(n) => Some(*n),
            NumericParam::Text(s) => s.trim().parse::<f64>().ok(),
        };

        value
            .filter(|v| v.is_finite())
            .ok_or_else(|| ConfigError::InvalidNumber {
                name,
                value: self.to_string(),
            })
    }
}

impl std::fmt::Display for NumericParam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericParam::Number(n) => write!(f, "{}", n),
            NumericParam::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for NumericParam {
    fn from(value: f64) -> Self {
        NumericParam::Number(value)
    }
}

/// Named initialization parameters, as received from the host.
///
/// Keys are camelCase (`inputFeatureVector`, `baseConstant`, ...). Unknown keys
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptParams {
    /// Document field holding the encoded vector.
    #[serde(default)]
    pub field: Option<String>,

    /// Comma-separated query vector.
    #[serde(default)]
    pub input_feature_vector: Option<String>,

    /// Required `version|` prefix on document vectors.
    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub base_constant: Option<NumericParam>,

    #[serde(default)]
    pub factor_constant: Option<NumericParam>,
}

impl ScriptParams {
    pub fn new(field: impl Into<String>, input_feature_vector: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            input_feature_vector: Some(input_feature_vector.into()),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_base_constant(mut self, value: impl Into<NumericParam>) -> Self {
        self.base_constant = Some(value.into());
        self
    }

    pub fn with_factor_constant(mut self, value: impl Into<NumericParam>) -> Self {
        self.factor_constant = Some(value.into());
        self
    }

    /// Decodes parameters from the host's name/value map.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, ConfigError> {
        Self::from_value(Value::Object(map.clone()))
    }

    /// Decodes parameters from a JSON object.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidParams { source: e })
    }

    /// Decodes parameters from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidParams { source: e })
    }

    /// Returns the query vector text as given, or an error if absent or blank.
    ///
    /// Only the blank check trims; components are trimmed one by one when
    /// parsed, so a trailing whitespace-only component still fails.
    pub fn required_input_feature_vector(&self) -> Result<&str, ConfigError> {
        let raw = self
            .input_feature_vector
            .as_deref()
            .ok_or(ConfigError::MissingParam {
                name: PARAM_INPUT_FEATURE_VECTOR,
            })?;
        required(PARAM_INPUT_FEATURE_VECTOR, Some(raw))?;
        Ok(raw)
    }
}

fn required<'a>(name: &'static str, value: Option<&'a str>) -> Result<&'a str, ConfigError> {
    let value = value.ok_or(ConfigError::MissingParam { name })?.trim();
    if value.is_empty() {
        return Err(ConfigError::EmptyParam { name });
    }
    Ok(value)
}

/// Validated scoring constants. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Document field holding the encoded vector.
    pub field: String,

    /// When set, document vectors must start with `version|`.
    pub version: Option<String>,

    /// Additive score offset. Default: `1.0`.
    pub base_constant: f64,

    /// Multiplier on the cosine similarity. Default: `1.0`.
    pub factor_constant: f64,
}

impl ScoringConfig {
    /// Creates a config with default constants and no version tag.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            version: None,
            base_constant: DEFAULT_BASE_CONSTANT,
            factor_constant: DEFAULT_FACTOR_CONSTANT,
        }
    }

    /// Validates `field` and resolves the constants, falling back to defaults.
    pub fn from_params(params: &ScriptParams) -> Result<Self, ConfigError> {
        let field = required(PARAM_FIELD, params.field.as_deref())?.to_string();

        let base_constant = params
            .base_constant
            .as_ref()
            .map(|p| p.resolve(PARAM_BASE_CONSTANT))
            .transpose()?
            .unwrap_or(DEFAULT_BASE_CONSTANT);

        let factor_constant = params
            .factor_constant
            .as_ref()
            .map(|p| p.resolve(PARAM_FACTOR_CONSTANT))
            .transpose()?
            .unwrap_or(DEFAULT_FACTOR_CONSTANT);

        Ok(Self {
            field,
            version: params.version.clone(),
            base_constant,
            factor_constant,
        })
    }

    /// `base_constant + factor_constant * cosine`, unclamped.
    #[inline]
    pub fn affine(&self, cosine: f64) -> f64 {
        self.base_constant + self.factor_constant * cosine
    }
}
