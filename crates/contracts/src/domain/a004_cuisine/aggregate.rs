use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityBase, Resource};
use crate::shared::form::{FieldErrors, FormDraft};

/// Кухня (узбекская, итальянская, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cuisine {
    #[serde(flatten)]
    pub base: EntityBase,

    pub name: String,
    #[serde(default)]
    pub name_ru: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Resource for Cuisine {
    const ENDPOINT: &'static str = "/api/cuisines/";
    const TITLE: &'static str = "Кухни";

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CuisineForm {
    pub name: String,
    pub name_ru: String,
}

impl FormDraft for CuisineForm {
    type Entity = Cuisine;

    fn from_entity(entity: &Cuisine) -> Self {
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
