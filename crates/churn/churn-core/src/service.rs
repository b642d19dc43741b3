//! Prediction service orchestration.

use churn_spi::{ChurnClassifier, ChurnPrediction, Result};
use serde_json::Value;

use crate::frame::to_feature_frame;
use crate::validation::validate;

/// Static liveness body, unchanged across the process lifetime.
pub const SERVICE_STATUS: &str = "API is running";

/// Stateless request orchestrator over an injected classifier.
///
/// Holds the classifier by value; the server wraps the whole service in an
/// `Arc` and shares it read-only across requests.
#[derive(Debug, Clone)]
pub struct PredictionService<M> {
    model: M,
}

impl<M: ChurnClassifier> PredictionService<M> {
    /// Create a service around a loaded classifier.
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Static liveness indicator; succeeds while the process runs.
    pub fn health(&self) -> &'static str {
        SERVICE_STATUS
    }

    /// The injected model's declared feature columns.
    pub fn feature_names(&self) -> &[String] {
        self.model.feature_names()
    }

    /// Run one prediction over a raw JSON payload.
    ///
    /// Validation failures never reach the model. Frame construction uses
    /// the model's own declared columns, so artifact drift surfaces as a
    /// [`churn_spi::ChurnError::SchemaMismatch`] rather than a silent
    /// reorder.
    pub fn predict(&self, payload: &Value) -> Result<ChurnPrediction> {
        let record = validate(payload)?;
        let frame = to_feature_frame(&record, self.model.feature_names())?;
        let label = self.model.predict(&frame)?;
        let proba = self.model.predict_proba(&frame)?;
        Ok(ChurnPrediction::new(label, proba[1]))
    }
}
