//! Serde helpers for loosely typed server fields

use serde::{Deserialize, Deserializer, Serializer};

/// Decimal-ish fields (price, priority) arrive either as JSON numbers or
/// as strings; the admin forms edit them as text.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
        Raw::Null(()) => String::new(),
    })
}

/// Decimal text as the server expects it: trimmed, with a dot separator
pub fn decimal_text(raw: &str) -> String {
    raw.trim().replace(',', ".")
}

/// Serializes a form field through `decimal_text`
pub fn serialize_decimal<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&decimal_text(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "string_or_number")]
        value: String,
    }

    #[test]
    fn test_accepts_all_shapes() {
        let parse = |raw: &str| serde_json::from_str::<Holder>(raw).unwrap().value;
        assert_eq!(parse(r#"{"value": "12.50"}"#), "12.50");
        assert_eq!(parse(r#"{"value": 3}"#), "3");
        assert_eq!(parse(r#"{"value": 2.5}"#), "2.5");
        assert_eq!(parse(r#"{"value": null}"#), "");
    }

    #[test]
    fn test_decimal_text() {
        assert_eq!(decimal_text(" 12,5 "), "12.5");
        assert_eq!(decimal_text("4500.00"), "4500.00");
    }
}
