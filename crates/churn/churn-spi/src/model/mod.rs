//! Data models for churn prediction.
//!
//! This module contains data structures shared across the prediction system.

mod frame;
mod prediction;
mod record;

pub use frame::{FeatureFrame, FeatureValue};
pub use prediction::ChurnPrediction;
pub use record::CustomerRecord;
