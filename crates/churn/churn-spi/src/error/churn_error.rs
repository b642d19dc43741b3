//! Churn prediction error types.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// One failed constraint on one input field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Canonical field name, e.g. `age`.
    pub field: String,
    /// The received value as JSON text, or `missing`.
    pub value: String,
    /// The constraint that was not met.
    pub constraint: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(field: &str, value: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.into(),
            constraint: constraint.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (got {})", self.field, self.constraint, self.value)
    }
}

/// Client input failed type, bound, or required-field checks.
///
/// Carries every violation found in the payload, not just the first.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// All violations found in one validation pass. Never empty.
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Create a validation error from the collected violations.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Names of the offending fields, in payload-table order.
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input ({} field(s)): ", self.violations.len())?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Churn prediction errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChurnError {
    /// Client fault: the payload did not satisfy the feature contract.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Deployment fault: the artifact's declared columns and the rename
    /// table disagree.
    #[error("schema mismatch: model expects column \"{column}\" but no input field maps to it")]
    SchemaMismatch { column: String },

    /// The model failed while scoring a frame it should have handled.
    #[error("inference failed: {0}")]
    Inference(String),

    /// The artifact could not be loaded or is internally inconsistent.
    #[error("artifact error: {0}")]
    Artifact(String),
}

/// Result type for churn prediction operations.
pub type Result<T> = std::result::Result<T, ChurnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display() {
        let violation = Violation::new("age", "15", "must be between 18 and 100");
        assert_eq!(violation.to_string(), "age: must be between 18 and 100 (got 15)");
    }

    #[test]
    fn test_validation_error_display_single() {
        let error = ValidationError::new(vec![Violation::new(
            "tenure",
            "missing",
            "required field is missing",
        )]);
        assert_eq!(
            error.to_string(),
            "invalid input (1 field(s)): tenure: required field is missing (got missing)"
        );
    }

    #[test]
    fn test_validation_error_display_lists_every_violation() {
        let error = ValidationError::new(vec![
            Violation::new("age", "15", "must be between 18 and 100"),
            Violation::new("total_spend", "\"abc\"", "must be a number"),
        ]);
        let text = error.to_string();
        assert!(text.starts_with("invalid input (2 field(s)): "));
        assert!(text.contains("age"));
        assert!(text.contains("total_spend"));
    }

    #[test]
    fn test_validation_error_fields() {
        let error = ValidationError::new(vec![
            Violation::new("age", "missing", "required field is missing"),
            Violation::new("gender", "missing", "required field is missing"),
        ]);
        assert_eq!(error.fields(), vec!["age", "gender"]);
    }

    #[test]
    fn test_schema_mismatch_display() {
        let error = ChurnError::SchemaMismatch {
            column: "Monthly Charges".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "schema mismatch: model expects column \"Monthly Charges\" but no input field maps to it"
        );
    }

    #[test]
    fn test_inference_display() {
        let error = ChurnError::Inference("column \"gender\" has no trained level for value \"Other\"".to_string());
        assert!(error.to_string().starts_with("inference failed: "));
    }

    #[test]
    fn test_artifact_display() {
        let error = ChurnError::Artifact("column \"age\" has no encoder".to_string());
        assert_eq!(error.to_string(), "artifact error: column \"age\" has no encoder");
    }

    #[test]
    fn test_validation_error_converts_to_churn_error() {
        let validation = ValidationError::new(vec![Violation::new(
            "age",
            "missing",
            "required field is missing",
        )]);
        let error: ChurnError = validation.clone().into();
        assert_eq!(error, ChurnError::Validation(validation));
    }

    #[test]
    fn test_violation_serializes_all_three_parts() {
        let violation = Violation::new("age", "15", "must be between 18 and 100");
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["field"], "age");
        assert_eq!(json["value"], "15");
        assert_eq!(json["constraint"], "must be between 18 and 100");
    }
}
