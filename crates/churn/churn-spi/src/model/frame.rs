//! Single-row feature frame types.

use serde::{Deserialize, Serialize};

/// One cell of a feature frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// A numeric feature.
    Number(f64),
    /// A categorical feature.
    Text(String),
}

impl FeatureValue {
    /// The numeric value, if this cell is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(n) => Some(*n),
            FeatureValue::Text(_) => None,
        }
    }

    /// The categorical value, if this cell is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FeatureValue::Number(_) => None,
            FeatureValue::Text(s) => Some(s.as_str()),
        }
    }
}

/// A single-row tabular structure whose column names and order exactly
/// match the model's training-time feature list.
///
/// Constructed only through [`FeatureFrame::from_pairs`], so a column can
/// never exist without its value and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFrame {
    columns: Vec<String>,
    values: Vec<FeatureValue>,
}

impl FeatureFrame {
    /// Build a frame from ordered column/value pairs.
    pub fn from_pairs(pairs: Vec<(String, FeatureValue)>) -> Self {
        let (columns, values) = pairs.into_iter().unzip();
        Self { columns, values }
    }

    /// Column names, in model order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Cell values, in the same order as [`FeatureFrame::columns`].
    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }

    /// Look up a cell by column name.
    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.values[i])
    }

    /// Number of columns in the frame.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the frame has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
