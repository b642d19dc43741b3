//! Validated customer input record.

use serde::{Deserialize, Serialize};

/// A fully-typed customer attribute record.
///
/// Constructed per request by the validation pass; every numeric field is
/// already within its declared bound by the time a value of this type
/// exists. Never persisted, discarded once the response is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Customer age in years, within 18..=100.
    pub age: i64,
    /// Categorical, unconstrained here; the model rejects unknown levels.
    pub gender: String,
    /// Months of customer relationship, non-negative.
    pub tenure: f64,
    /// Non-negative usage rate.
    pub usage_frequency: f64,
    /// Non-negative support call count.
    pub support_calls: f64,
    /// Non-negative payment delay.
    pub payment_delay: f64,
    /// Categorical subscription tier.
    pub subscription_type: String,
    /// Categorical contract term.
    pub contract_length: String,
    /// Non-negative total spend.
    pub total_spend: f64,
    /// Non-negative recency metric.
    pub last_interaction: f64,
}
