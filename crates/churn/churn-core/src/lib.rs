//! Churn Prediction Core
//!
//! Implementations for payload validation, feature frame construction,
//! artifact loading, and the prediction service.

mod frame;
mod pipeline;
mod service;
mod validation;

pub use frame::*;
pub use pipeline::*;
pub use service::*;
pub use validation::*;
