use serde::{Deserialize, Serialize};
use std::fmt;

/// Непрозрачный идентификатор записи, выдаётся сервером.
///
/// Сервер отдаёт то числа, то строки (slug/uuid), поэтому клиент хранит
/// оба варианта как есть и никогда не вычисляет идентификаторы сам.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl EntityId {
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Разбор значения из поля формы (select/input): числа остаются числами
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(
            raw.parse::<i64>()
                .map(EntityId::Number)
                .unwrap_or_else(|_| EntityId::Text(raw.to_string())),
        )
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_numbers_and_strings() {
        let ids: Vec<EntityId> = serde_json::from_str(r#"[7, "a1b2"]"#).unwrap();
        assert_eq!(ids, vec![EntityId::Number(7), EntityId::Text("a1b2".into())]);
        assert_eq!(ids[0].as_string(), "7");
        assert_eq!(ids[1].as_string(), "a1b2");
    }

    #[test]
    fn test_parse_form_value() {
        assert_eq!(EntityId::parse(" 12 "), Some(EntityId::Number(12)));
        assert_eq!(EntityId::parse("slug-1"), Some(EntityId::Text("slug-1".into())));
        assert_eq!(EntityId::parse("  "), None);
    }
}
