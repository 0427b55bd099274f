//! Test fixtures for integration tests.

use std::collections::HashMap;

use fvscore::{FeatureVectorScorer, ScriptParams};

pub const FIELD: &str = "feature_vector";

pub const VERSION: &str = "20240601";

/// Deterministic pseudo-random vector in `[-1, 1)`.
pub fn seeded_vector(seed: u64, dim: usize) -> Vec<f64> {
    (0..dim)
        .map(|i| {
            let mixed = (seed.wrapping_mul(31).wrapping_add(i as u64 * 17)) % 1000;
            mixed as f64 / 500.0 - 1.0
        })
        .collect()
}

pub fn encode(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn encode_versioned(version: &str, values: &[f64]) -> String {
    format!("{}|{}", version, encode(values))
}

pub fn document(value: &str) -> HashMap<String, String> {
    let mut doc = HashMap::new();
    doc.insert(FIELD.to_string(), value.to_string());
    doc
}

#[derive(Default)]
pub struct ScorerBuilder {
    query: Option<String>,
    version: Option<String>,
    base_constant: Option<f64>,
    factor_constant: Option<f64>,
}

impl ScorerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, values: &[f64]) -> Self {
        self.query = Some(encode(values));
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn base_constant(mut self, value: f64) -> Self {
        self.base_constant = Some(value);
        self
    }

    pub fn factor_constant(mut self, value: f64) -> Self {
        self.factor_constant = Some(value);
        self
    }

    pub fn params(self) -> ScriptParams {
        let mut params = ScriptParams::new(FIELD, self.query.unwrap_or_else(|| "1,0".into()));
        if let Some(version) = self.version {
            params = params.with_version(version);
        }
        if let Some(base) = self.base_constant {
            params = params.with_base_constant(base);
        }
        if let Some(factor) = self.factor_constant {
            params = params.with_factor_constant(factor);
        }
        params
    }

    pub fn build(self) -> FeatureVectorScorer {
        FeatureVectorScorer::from_params(&self.params()).expect("fixture params are valid")
    }
}
