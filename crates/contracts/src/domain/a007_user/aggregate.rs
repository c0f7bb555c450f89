use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityBase, Resource};
use crate::shared::form::{FieldErrors, FormDraft};

/// Пользователь приложения-справочника
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub base: EntityBase,

    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
}

impl Resource for User {
    const ENDPOINT: &'static str = "/api/users/";
    const TITLE: &'static str = "Пользователи";

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

/// Пользователей админ только редактирует, регистрация идёт через приложение
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserForm {
    pub full_name: String,
    pub phone: String,
    pub is_active: bool,
}

impl FormDraft for UserForm {
    type Entity = User;

    fn from_entity(entity: &User) -> Self {
        Self {
            full_name: entity.full_name.clone().unwrap_or_default(),
            phone: entity.phone.clone().unwrap_or_default(),
            is_active: entity.is_active,
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        Ok(())
    }
}
