//! Prediction output type.

use serde::{Deserialize, Serialize};

/// Binary churn prediction with its positive-class probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChurnPrediction {
    /// 1 if the customer is predicted to churn, 0 otherwise.
    pub churn_prediction: u8,
    /// Probability of the churn class, rounded to four decimal places.
    pub churn_probability: f64,
}

impl ChurnPrediction {
    /// Build a prediction, rounding the probability to four decimal places
    /// for response stability across calls.
    pub fn new(label: u8, probability: f64) -> Self {
        Self {
            churn_prediction: label,
            churn_probability: (probability * 10_000.0).round() / 10_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_rounded_to_four_decimals() {
        let prediction = ChurnPrediction::new(1, 0.123_456_78);
        assert_eq!(prediction.churn_probability, 0.1235);
    }

    #[test]
    fn test_rounding_is_stable_at_four_decimals() {
        let prediction = ChurnPrediction::new(0, 0.5);
        assert_eq!(prediction.churn_probability, 0.5);
        let prediction = ChurnPrediction::new(0, 0.99995);
        assert_eq!(prediction.churn_probability, 1.0);
    }

    #[test]
    fn test_wire_field_names() {
        let prediction = ChurnPrediction::new(1, 0.75);
        let json = serde_json::to_value(&prediction).unwrap();
        assert_eq!(json["churn_prediction"], 1);
        assert_eq!(json["churn_probability"], 0.75);
    }
}
