use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityBase, EntityId, Resource};
use crate::shared::form::{FieldErrors, FormDraft};

/// Подкатегория, всегда принадлежит категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    #[serde(flatten)]
    pub base: EntityBase,

    pub name: String,
    #[serde(default)]
    pub name_ru: Option<String>,
    pub category: EntityId,
    #[serde(default)]
    pub category_name: Option<String>,
}

impl Resource for SubCategory {
    const ENDPOINT: &'static str = "/api/sub-categories/";
    const TITLE: &'static str = "Подкатегории";

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubCategoryForm {
    pub name: String,
    pub name_ru: String,
    /// id категории как в select
    pub category: String,
}

impl FormDraft for SubCategoryForm {
    type Entity = SubCategory;

    fn from_entity(entity: &SubCategory) -> Self {
        Self {
            name: entity.name.clone(),
            name_ru: entity.name_ru.clone().unwrap_or_default(),
            category: entity.category.as_string(),
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name);
        if EntityId::parse(&self.category).is_none() {
            errors.insert("category", "Выберите категорию");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_keeps_category_id_as_text() {
        let sub: SubCategory = serde_json::from_str(
            r#"{"id":"s-1","name":"Cakes","category":4,"category_name":"Desserts"}"#,
        )
        .unwrap();
        let form = SubCategoryForm::from_entity(&sub);
        assert_eq!(form.category, "4");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_category_required() {
        let form = SubCategoryForm {
            name: "Cakes".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate().unwrap_err().get("category"),
            Some("Выберите категорию")
        );
    }
}
