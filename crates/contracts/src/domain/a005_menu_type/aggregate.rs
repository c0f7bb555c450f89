use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityBase, Resource};
use crate::shared::form::{FieldErrors, FormDraft};

/// Раздел меню (завтраки, напитки, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuType {
    #[serde(flatten)]
    pub base: EntityBase,

    pub name: String,
    #[serde(default)]
    pub name_ru: Option<String>,
}

impl Resource for MenuType {
    const ENDPOINT: &'static str = "/api/menu-types/";
    const TITLE: &'static str = "Разделы меню";

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuTypeForm {
    pub name: String,
    pub name_ru: String,
}

impl FormDraft for MenuTypeForm {
    type Entity = MenuType;

    fn from_entity(entity: &MenuType) -> Self {
        Self {
            name: entity.name.clone(),
            name_ru: entity.name_ru.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name);
        errors.into_result()
    }
}
