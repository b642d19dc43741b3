//! Error types for churn prediction.
//!
//! This module contains error types and the Result alias.

mod churn_error;

pub use churn_error::{ChurnError, Result, ValidationError, Violation};
