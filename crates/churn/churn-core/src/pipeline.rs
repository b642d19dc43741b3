//! Artifact-backed churn classifier.
//!
//! The artifact is a JSON document holding a standardized logistic scorer:
//! the model's declared feature columns, one encoder per column, and the
//! intercept. It is read once at startup and shared read-only afterwards.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use churn_api::ArtifactConfig;
use churn_spi::{ChurnClassifier, ChurnError, FeatureFrame, FeatureValue, Result};
use serde::{Deserialize, Serialize};

/// Per-column encoder, as serialized in the artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FeatureEncoder {
    /// Standardized numeric column with its logistic coefficient.
    Numeric { mean: f64, scale: f64, coef: f64 },
    /// Categorical column with one weight per training-time level.
    Categorical { levels: BTreeMap<String, f64> },
}

/// Pre-trained standardized logistic scorer loaded from the model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticPipeline {
    feature_names: Vec<String>,
    intercept: f64,
    positive_threshold: f64,
    features: BTreeMap<String, FeatureEncoder>,
}

impl LogisticPipeline {
    /// Load and self-check an artifact from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| ChurnError::Artifact(format!("cannot open {}: {e}", path.display())))?;
        let pipeline: Self = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ChurnError::Artifact(format!("cannot parse {}: {e}", path.display())))?;
        pipeline.self_check()?;
        Ok(pipeline)
    }

    /// Load from configuration.
    pub fn from_config(config: &ArtifactConfig) -> Result<Self> {
        Self::load(&config.path)
    }

    /// Build from an in-memory artifact document.
    pub fn from_value(document: serde_json::Value) -> Result<Self> {
        let pipeline: Self = serde_json::from_value(document)
            .map_err(|e| ChurnError::Artifact(format!("malformed artifact document: {e}")))?;
        pipeline.self_check()?;
        Ok(pipeline)
    }

    /// Reject internally inconsistent artifacts before the first request.
    fn self_check(&self) -> Result<()> {
        if self.feature_names.is_empty() {
            return Err(ChurnError::Artifact(
                "artifact declares no feature columns".to_string(),
            ));
        }
        if !(self.positive_threshold > 0.0 && self.positive_threshold < 1.0) {
            return Err(ChurnError::Artifact(format!(
                "positive_threshold {} is outside (0, 1)",
                self.positive_threshold
            )));
        }
        for name in &self.feature_names {
            match self.features.get(name) {
                None => {
                    return Err(ChurnError::Artifact(format!(
                        "column \"{name}\" has no encoder"
                    )));
                }
                Some(FeatureEncoder::Numeric { scale, .. }) if *scale <= 0.0 => {
                    return Err(ChurnError::Artifact(format!(
                        "column \"{name}\" has a non-positive scale"
                    )));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Positive-class probability for a single-row frame.
    fn score(&self, frame: &FeatureFrame) -> Result<f64> {
        let mut z = self.intercept;
        for name in &self.feature_names {
            let value = frame.get(name).ok_or_else(|| {
                ChurnError::Inference(format!("feature frame is missing column \"{name}\""))
            })?;
            let encoder = self.features.get(name).ok_or_else(|| {
                ChurnError::Inference(format!("no encoder for column \"{name}\""))
            })?;
            match (encoder, value) {
                (FeatureEncoder::Numeric { mean, scale, coef }, FeatureValue::Number(x)) => {
                    z += (x - mean) / scale * coef;
                }
                (FeatureEncoder::Categorical { levels }, FeatureValue::Text(level)) => {
                    z += levels.get(level).copied().ok_or_else(|| {
                        ChurnError::Inference(format!(
                            "column \"{name}\" has no trained level for value \"{level}\""
                        ))
                    })?;
                }
                (FeatureEncoder::Numeric { .. }, FeatureValue::Text(level)) => {
                    return Err(ChurnError::Inference(format!(
                        "column \"{name}\" expects a number, got \"{level}\""
                    )));
                }
                (FeatureEncoder::Categorical { .. }, FeatureValue::Number(x)) => {
                    return Err(ChurnError::Inference(format!(
                        "column \"{name}\" expects a category, got {x}"
                    )));
                }
            }
        }
        Ok(sigmoid(z))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl ChurnClassifier for LogisticPipeline {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, frame: &FeatureFrame) -> Result<u8> {
        Ok((self.score(frame)? >= self.positive_threshold) as u8)
    }

    fn predict_proba(&self, frame: &FeatureFrame) -> Result<[f64; 2]> {
        let p = self.score(frame)?;
        Ok([1.0 - p, p])
    }
}
