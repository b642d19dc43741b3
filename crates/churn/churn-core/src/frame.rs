//! Feature frame construction against the model's declared columns.

use churn_spi::{ChurnError, CustomerRecord, FeatureFrame, FeatureValue, Result};

/// Internal snake_case field name to training-time display column.
///
/// `age`, `gender`, and `tenure` keep their internal names and are not
/// listed here.
const RENAME: [(&str, &str); 7] = [
    ("usage_frequency", "Usage Frequency"),
    ("support_calls", "Support Calls"),
    ("payment_delay", "Payment Delay"),
    ("subscription_type", "Subscription Type"),
    ("contract_length", "Contract Length"),
    ("total_spend", "Total Spend"),
    ("last_interaction", "Last Interaction"),
];

fn renamed(internal: &'static str) -> &'static str {
    RENAME
        .iter()
        .find(|(from, _)| *from == internal)
        .map(|(_, to)| *to)
        .unwrap_or(internal)
}

/// The record's fields under their training-time column names.
fn record_columns(record: &CustomerRecord) -> Vec<(&'static str, FeatureValue)> {
    vec![
        (renamed("age"), FeatureValue::Number(record.age as f64)),
        (renamed("gender"), FeatureValue::Text(record.gender.clone())),
        (renamed("tenure"), FeatureValue::Number(record.tenure)),
        (
            renamed("usage_frequency"),
            FeatureValue::Number(record.usage_frequency),
        ),
        (
            renamed("support_calls"),
            FeatureValue::Number(record.support_calls),
        ),
        (
            renamed("payment_delay"),
            FeatureValue::Number(record.payment_delay),
        ),
        (
            renamed("subscription_type"),
            FeatureValue::Text(record.subscription_type.clone()),
        ),
        (
            renamed("contract_length"),
            FeatureValue::Text(record.contract_length.clone()),
        ),
        (
            renamed("total_spend"),
            FeatureValue::Number(record.total_spend),
        ),
        (
            renamed("last_interaction"),
            FeatureValue::Number(record.last_interaction),
        ),
    ]
}

/// Rename the record's fields, then select and reorder them to exactly
/// match `expected_columns`.
///
/// Fails with [`ChurnError::SchemaMismatch`] on the first expected column
/// that no record field maps to. A drifted artifact must never produce a
/// partial frame.
pub fn to_feature_frame(
    record: &CustomerRecord,
    expected_columns: &[String],
) -> Result<FeatureFrame> {
    let available = record_columns(record);
    let mut pairs = Vec::with_capacity(expected_columns.len());
    for column in expected_columns {
        let value = available
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| ChurnError::SchemaMismatch {
                column: column.clone(),
            })?;
        pairs.push((column.clone(), value));
    }
    Ok(FeatureFrame::from_pairs(pairs))
}
