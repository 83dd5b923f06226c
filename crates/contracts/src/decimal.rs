//! Tolerant parsing for decimal fields.
//!
//! The API serializes decimal columns as JSON strings (`"123.45"`), while
//! computed aggregates arrive as plain numbers. Display code treats a
//! missing or unparseable value as zero instead of failing the whole
//! payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a decimal that may be a number, a numeric string or null.
///
/// Anything that does not parse cleanly becomes `None`; callers decide
/// whether `None` means "absent" or "zero" via [`or_zero`].
pub fn flexible<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_value))
}

fn parse_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Zero-defaulting accessor used everywhere a decimal feeds arithmetic.
pub fn or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "flexible")]
        price: Option<f64>,
    }

    #[test]
    fn parses_numeric_string() {
        let row: Row = serde_json::from_str(r#"{"price": "123.45"}"#).unwrap();
        assert_eq!(row.price, Some(123.45));
    }

    #[test]
    fn parses_plain_number() {
        let row: Row = serde_json::from_str(r#"{"price": 99.9}"#).unwrap();
        assert_eq!(row.price, Some(99.9));
    }

    #[test]
    fn null_and_absent_become_none() {
        let row: Row = serde_json::from_str(r#"{"price": null}"#).unwrap();
        assert_eq!(row.price, None);
        let row: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(row.price, None);
    }

    #[test]
    fn garbage_coerces_to_none_not_error() {
        let row: Row = serde_json::from_str(r#"{"price": "n/a"}"#).unwrap();
        assert_eq!(row.price, None);
        assert_eq!(or_zero(row.price), 0.0);
    }
}
