//! Черновики форм создания/редактирования и расчёт полезной нагрузки.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use super::api::ApiError;

/// Ошибки по полям формы: имя поля → текст ошибки
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// Обязательное текстовое поле
    pub fn require(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.insert(field, "Обязательное поле");
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.keys().map(String::as_str).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Черновик формы сущности.
///
/// `from_entity` задаёт значения по умолчанию в режиме редактирования и он же
/// служит базой для сравнения при PATCH.
pub trait FormDraft: Serialize + Clone + Default + PartialEq + Send + Sync + 'static {
    type Entity;

    fn from_entity(entity: &Self::Entity) -> Self;

    fn validate(&self) -> Result<(), FieldErrors>;
}

fn to_object<T: Serialize>(value: &T) -> Result<Map<String, Value>, ApiError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::Decode("form draft must serialize to an object".to_string())),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Все заполненные поля черновика (режим создания); `null` не отправляется
pub fn full_fields<D: Serialize>(draft: &D) -> Result<Map<String, Value>, ApiError> {
    let mut map = to_object(draft)?;
    map.retain(|_, v| !v.is_null());
    Ok(map)
}

/// Только поля, отличающиеся от базовой версии (режим редактирования)
pub fn changed_fields<D: Serialize>(baseline: &D, draft: &D) -> Result<Map<String, Value>, ApiError> {
    let before = to_object(baseline)?;
    let mut after = to_object(draft)?;
    after.retain(|key, value| before.get(key) != Some(value));
    Ok(after)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Clone, Default, PartialEq)]
    struct Draft {
        priority: String,
        description: String,
        link: Option<String>,
    }

    #[test]
    fn test_changed_fields_only_contains_edits() {
        let baseline = Draft {
            priority: "2".into(),
            description: "Summer promo".into(),
            link: None,
        };
        let edited = Draft {
            priority: "3".into(),
            ..baseline.clone()
        };

        let diff = changed_fields(&baseline, &edited).unwrap();
        assert_eq!(Value::Object(diff), json!({"priority": "3"}));
        assert!(changed_fields(&baseline, &baseline).unwrap().is_empty());
    }

    #[test]
    fn test_full_fields_skips_nulls() {
        let draft = Draft {
            priority: "1".into(),
            description: String::new(),
            link: None,
        };
        let map = full_fields(&draft).unwrap();
        assert_eq!(Value::Object(map), json!({"priority": "1", "description": ""}));
    }

    #[test]
    fn test_field_errors() {
        let mut errors = FieldErrors::new();
        errors.require("name", "  ");
        errors.require("name_ru", "Десерты");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Обязательное поле"));
        assert_eq!(errors.to_string(), "invalid fields: name");
        assert!(errors.into_result().is_err());
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
