//! Contract definitions for churn prediction.
//!
//! This module contains trait definitions that providers must implement.

mod classifier;

pub use classifier::ChurnClassifier;
