use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityBase, Resource};
use crate::shared::form::{FieldErrors, FormDraft};

/// Категория заведений (с иконкой)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub base: EntityBase,

    pub name: String,
    #[serde(default)]
    pub name_ru: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl Resource for Category {
    const ENDPOINT: &'static str = "/api/categories/";
    const TITLE: &'static str = "Категории";

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryForm {
    pub name: String,
    pub name_ru: String,
}

impl FormDraft for CategoryForm {
    type Entity = Category;

    fn from_entity(entity: &Category) -> Self {
        Self {
            name: entity.name.clone(),
            name_ru: entity.name_ru.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name);
        errors.require("name_ru", &self.name_ru);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityId;

    #[test]
    fn test_decode_category() {
        let raw = r#"{"id":1,"name":"Desserts","name_ru":"Десерты","created_at":"2024-01-01T00:00:00Z"}"#;
        let category: Category = serde_json::from_str(raw).unwrap();
        assert_eq!(category.id(), &EntityId::Number(1));
        assert_eq!(category.name_ru.as_deref(), Some("Десерты"));
        assert_eq!(category.base.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(category.icon, None);
    }
}
