//! Classifier trait for churn prediction models.
//!
//! Defines the core trait interface that every deployed churn model must
//! implement.

use crate::error::Result;
use crate::model::FeatureFrame;

/// Common trait for pre-trained binary churn classifiers.
///
/// Implementations are read-only after construction and safe to share
/// across concurrent requests. The trait deliberately has no `fit`:
/// training happens offline and the deployed process only scores.
///
/// # Example
///
/// ```rust,ignore
/// use churn_spi::{ChurnClassifier, FeatureFrame};
///
/// fn score<M: ChurnClassifier>(model: &M, frame: &FeatureFrame) -> churn_spi::Result<f64> {
///     Ok(model.predict_proba(frame)?[1])
/// }
/// ```
pub trait ChurnClassifier {
    /// Training-time feature columns, in the order the model expects.
    ///
    /// This is the authoritative column list; callers must build frames
    /// against it rather than against any hardcoded copy.
    fn feature_names(&self) -> &[String];

    /// Predict the binary churn label for a single-row frame.
    ///
    /// # Returns
    ///
    /// `1` for predicted churn, `0` otherwise, or `Err(ChurnError)` if the
    /// frame cannot be scored.
    fn predict(&self, frame: &FeatureFrame) -> Result<u8>;

    /// Class probability distribution for a single-row frame.
    ///
    /// # Returns
    ///
    /// `[p_retain, p_churn]` with both entries in `[0, 1]`, or
    /// `Err(ChurnError)` if the frame cannot be scored.
    fn predict_proba(&self, frame: &FeatureFrame) -> Result<[f64; 2]>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChurnError;
    use crate::model::FeatureValue;

    /// A mock classifier that returns a fixed probability.
    struct MockConstantClassifier {
        feature_names: Vec<String>,
        probability: f64,
    }

    impl MockConstantClassifier {
        fn new(columns: &[&str], probability: f64) -> Self {
            Self {
                feature_names: columns.iter().map(|c| c.to_string()).collect(),
                probability,
            }
        }
    }

    impl ChurnClassifier for MockConstantClassifier {
        fn feature_names(&self) -> &[String] {
            &self.feature_names
        }

        fn predict(&self, frame: &FeatureFrame) -> Result<u8> {
            Ok((self.predict_proba(frame)?[1] >= 0.5) as u8)
        }

        fn predict_proba(&self, frame: &FeatureFrame) -> Result<[f64; 2]> {
            if frame.columns() != self.feature_names.as_slice() {
                return Err(ChurnError::Inference(
                    "frame columns do not match the trained layout".to_string(),
                ));
            }
            Ok([1.0 - self.probability, self.probability])
        }
    }

    fn frame_for(columns: &[&str]) -> FeatureFrame {
        FeatureFrame::from_pairs(
            columns
                .iter()
                .map(|c| (c.to_string(), FeatureValue::Number(1.0)))
                .collect(),
        )
    }

    #[test]
    fn test_predict_agrees_with_proba() {
        let churner = MockConstantClassifier::new(&["age", "tenure"], 0.9);
        let stayer = MockConstantClassifier::new(&["age", "tenure"], 0.1);
        let frame = frame_for(&["age", "tenure"]);

        assert_eq!(churner.predict(&frame).unwrap(), 1);
        assert_eq!(stayer.predict(&frame).unwrap(), 0);
    }

    #[test]
    fn test_proba_is_a_distribution() {
        let model = MockConstantClassifier::new(&["age"], 0.3);
        let proba = model.predict_proba(&frame_for(&["age"])).unwrap();
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mismatched_frame_is_an_inference_error() {
        let model = MockConstantClassifier::new(&["age", "tenure"], 0.5);
        let result = model.predict(&frame_for(&["tenure", "age"]));

        assert!(matches!(result, Err(ChurnError::Inference(_))));
    }

    #[test]
    fn test_classifier_as_trait_object() {
        let model: Box<dyn ChurnClassifier> =
            Box::new(MockConstantClassifier::new(&["age"], 0.7));

        assert_eq!(model.feature_names(), &["age".to_string()]);
        assert_eq!(model.predict(&frame_for(&["age"])).unwrap(), 1);
    }

    #[test]
    fn test_generic_scoring_function() {
        fn positive_proba<M: ChurnClassifier>(model: &M, frame: &FeatureFrame) -> Result<f64> {
            Ok(model.predict_proba(frame)?[1])
        }

        let model = MockConstantClassifier::new(&["age"], 0.42);
        let proba = positive_proba(&model, &frame_for(&["age"])).unwrap();
        assert!((proba - 0.42).abs() < 1e-12);
    }
}
