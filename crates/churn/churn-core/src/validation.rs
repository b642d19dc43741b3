//! Payload validation against the feature contract.
//!
//! The accepted fields, their accepted spellings, and their bounds form a
//! static table evaluated once per request. The pass either yields a
//! fully-typed [`CustomerRecord`] or the complete list of violations; it
//! never returns a partially populated record.

use churn_spi::{CustomerRecord, ValidationError, Violation};
use serde_json::{Map, Value};

/// Inclusive lower bound for a plausible human age.
pub const AGE_MIN: i64 = 18;
/// Inclusive upper bound for a plausible human age.
pub const AGE_MAX: i64 = 100;

/// One accepted input field: its canonical name plus the alternative
/// spellings observed on the wire (display names with spaces and the
/// upstream form's underscore style).
struct WireField {
    name: &'static str,
    aliases: &'static [&'static str],
}

const AGE: WireField = WireField { name: "age", aliases: &["Age"] };
const GENDER: WireField = WireField { name: "gender", aliases: &["Gender"] };
const TENURE: WireField = WireField { name: "tenure", aliases: &["Tenure"] };
const USAGE_FREQUENCY: WireField = WireField {
    name: "usage_frequency",
    aliases: &["Usage Frequency", "Usage_Frequency"],
};
const SUPPORT_CALLS: WireField = WireField {
    name: "support_calls",
    aliases: &["Support Calls", "Support_Calls"],
};
const PAYMENT_DELAY: WireField = WireField {
    name: "payment_delay",
    aliases: &["Payment Delay", "Payment_Delay"],
};
const SUBSCRIPTION_TYPE: WireField = WireField {
    name: "subscription_type",
    aliases: &["Subscription Type", "Subscription_Type"],
};
const CONTRACT_LENGTH: WireField = WireField {
    name: "contract_length",
    aliases: &["Contract Length", "Contract_Length"],
};
const TOTAL_SPEND: WireField = WireField {
    name: "total_spend",
    aliases: &["Total Spend", "Total_Spend"],
};
const LAST_INTERACTION: WireField = WireField {
    name: "last_interaction",
    aliases: &["Last Interaction", "Last_Interaction"],
};

/// Parse an untyped payload into a [`CustomerRecord`].
///
/// Collects every violation before failing: a payload with three bad
/// fields produces a [`ValidationError`] naming all three. Unknown extra
/// keys are ignored.
pub fn validate(payload: &Value) -> Result<CustomerRecord, ValidationError> {
    let Some(object) = payload.as_object() else {
        return Err(ValidationError::new(vec![Violation::new(
            "payload",
            payload.to_string(),
            "expected a JSON object",
        )]));
    };

    let mut violations = Vec::new();

    let age = bounded_int(object, &AGE, AGE_MIN, AGE_MAX, &mut violations);
    let gender = categorical(object, &GENDER, &mut violations);
    let tenure = non_negative(object, &TENURE, &mut violations);
    let usage_frequency = non_negative(object, &USAGE_FREQUENCY, &mut violations);
    let support_calls = non_negative(object, &SUPPORT_CALLS, &mut violations);
    let payment_delay = non_negative(object, &PAYMENT_DELAY, &mut violations);
    let subscription_type = categorical(object, &SUBSCRIPTION_TYPE, &mut violations);
    let contract_length = categorical(object, &CONTRACT_LENGTH, &mut violations);
    let total_spend = non_negative(object, &TOTAL_SPEND, &mut violations);
    let last_interaction = non_negative(object, &LAST_INTERACTION, &mut violations);

    if let (
        Some(age),
        Some(gender),
        Some(tenure),
        Some(usage_frequency),
        Some(support_calls),
        Some(payment_delay),
        Some(subscription_type),
        Some(contract_length),
        Some(total_spend),
        Some(last_interaction),
    ) = (
        age,
        gender,
        tenure,
        usage_frequency,
        support_calls,
        payment_delay,
        subscription_type,
        contract_length,
        total_spend,
        last_interaction,
    ) {
        Ok(CustomerRecord {
            age,
            gender,
            tenure,
            usage_frequency,
            support_calls,
            payment_delay,
            subscription_type,
            contract_length,
            total_spend,
            last_interaction,
        })
    } else {
        Err(ValidationError::new(violations))
    }
}

/// First present spelling wins: canonical name, then aliases in order.
fn lookup<'a>(object: &'a Map<String, Value>, field: &WireField) -> Option<&'a Value> {
    object
        .get(field.name)
        .or_else(|| field.aliases.iter().find_map(|alias| object.get(*alias)))
}

fn bounded_int(
    object: &Map<String, Value>,
    field: &WireField,
    min: i64,
    max: i64,
    violations: &mut Vec<Violation>,
) -> Option<i64> {
    let Some(value) = lookup(object, field) else {
        violations.push(missing(field));
        return None;
    };
    let Some(parsed) = coerce_int(value) else {
        violations.push(Violation::new(
            field.name,
            value.to_string(),
            "must be an integer",
        ));
        return None;
    };
    if parsed < min || parsed > max {
        violations.push(Violation::new(
            field.name,
            value.to_string(),
            format!("must be between {min} and {max}"),
        ));
        return None;
    }
    Some(parsed)
}

fn non_negative(
    object: &Map<String, Value>,
    field: &WireField,
    violations: &mut Vec<Violation>,
) -> Option<f64> {
    let Some(value) = lookup(object, field) else {
        violations.push(missing(field));
        return None;
    };
    let Some(parsed) = coerce_float(value) else {
        violations.push(Violation::new(
            field.name,
            value.to_string(),
            "must be a number",
        ));
        return None;
    };
    if parsed < 0.0 {
        violations.push(Violation::new(
            field.name,
            value.to_string(),
            "must be greater than or equal to 0",
        ));
        return None;
    }
    Some(parsed)
}

fn categorical(
    object: &Map<String, Value>,
    field: &WireField,
    violations: &mut Vec<Violation>,
) -> Option<String> {
    let Some(value) = lookup(object, field) else {
        violations.push(missing(field));
        return None;
    };
    let Some(text) = value.as_str() else {
        violations.push(Violation::new(
            field.name,
            value.to_string(),
            "must be a string",
        ));
        return None;
    };
    Some(text.to_string())
}

fn missing(field: &WireField) -> Violation {
    Violation::new(field.name, "missing", "required field is missing")
}

/// Accept JSON integers, integral floats, and numeric strings.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Accept JSON numbers and numeric strings. Non-finite values never coerce.
fn coerce_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok().filter(|f: &f64| f.is_finite()),
        _ => None,
    }
}
