/// Utilities for date and time formatting
///
/// Server timestamps come as RFC 3339 (`2024-01-01T00:00:00Z`) or as naive
/// ISO datetimes without an offset. Anything else is shown as is.
use chrono::{DateTime, NaiveDateTime};

/// Format server timestamp to DD.MM.YYYY HH:MM
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d.%m.%Y %H:%M").to_string();
    }
    raw.to_string()
}

/// Для колонок "Создано": пустое поле показывается прочерком
pub fn format_optional(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.is_empty() => format_timestamp(value),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_timestamp("2024-01-01T00:00:00Z"), "01.01.2024 00:00");
        assert_eq!(format_timestamp("2024-12-31T23:59:59"), "31.12.2024 23:59");
    }

    #[test]
    fn test_unparseable_is_shown_verbatim() {
        assert_eq!(format_timestamp("вчера"), "вчера");
        assert_eq!(format_timestamp("2024-03-15"), "2024-03-15");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some("2024-01-01T00:00:00Z")), "01.01.2024 00:00");
        assert_eq!(format_optional(None), "—");
        assert_eq!(format_optional(Some("")), "—");
    }
}
