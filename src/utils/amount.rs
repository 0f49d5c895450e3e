use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Lenient amount parsing: numbers pass through, numeric strings are
/// parsed, anything else (blank string, null, garbage) becomes 0. Form
/// inputs submit amounts as strings, so rejecting here would bounce
/// otherwise-valid records.
pub fn coerce_amount(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// `#[serde(deserialize_with = "...")]` adapter over [`coerce_amount`].
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_amount(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_numeric_strings_parse() {
        assert_eq!(coerce_amount(&json!(250)), 250.0);
        assert_eq!(coerce_amount(&json!(12.5)), 12.5);
        assert_eq!(coerce_amount(&json!("310")), 310.0);
        assert_eq!(coerce_amount(&json!(" 42.5 ")), 42.5);
    }

    #[test]
    fn everything_else_coerces_to_zero() {
        assert_eq!(coerce_amount(&json!("")), 0.0);
        assert_eq!(coerce_amount(&json!("abc")), 0.0);
        assert_eq!(coerce_amount(&json!(null)), 0.0);
        assert_eq!(coerce_amount(&json!([1, 2])), 0.0);
    }
}
