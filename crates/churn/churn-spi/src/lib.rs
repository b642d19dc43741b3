//! Churn Prediction Service Provider Interface
//!
//! Defines traits and types for churn prediction.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ChurnClassifier;
pub use error::{ChurnError, Result, ValidationError, Violation};
pub use model::{ChurnPrediction, CustomerRecord, FeatureFrame, FeatureValue};
