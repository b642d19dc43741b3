//! Churn Prediction Facade
//!
//! Unified re-exports for the churn prediction module.
//!
//! This facade provides a single entry point to all prediction functionality:
//! - `ChurnClassifier` trait, data model, and errors from SPI
//! - Configuration types from API
//! - Validation, feature frame construction, the artifact-backed pipeline,
//!   and `PredictionService` from Core

// Re-export everything from SPI
pub use churn_spi::*;

// Re-export everything from API
pub use churn_api::*;

// Re-export everything from Core
pub use churn_core::*;
