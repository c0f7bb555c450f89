use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityBase, EntityId, Resource};
use crate::shared::form::{FieldErrors, FormDraft};

/// Сотрудник заведения с доступом к его карточке
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    #[serde(flatten)]
    pub base: EntityBase,

    pub email: String,
    pub business: EntityId,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl Resource for Collaborator {
    const ENDPOINT: &'static str = "/api/collaborators/";
    const TITLE: &'static str = "Сотрудники";

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

pub const COLLABORATOR_ROLES: &[(&str, &str)] = &[("manager", "Менеджер"), ("editor", "Редактор")];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollaboratorForm {
    pub email: String,
    pub business: String,
    pub role: String,
}

impl FormDraft for CollaboratorForm {
    type Entity = Collaborator;

    fn from_entity(entity: &Collaborator) -> Self {
        Self {
            email: entity.email.clone(),
            business: entity.business.as_string(),
            role: entity.role.clone(),
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("email", &self.email);
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            errors.insert("email", "Некорректный email");
        }
        if EntityId::parse(&self.business).is_none() {
            errors.insert("business", "Выберите заведение");
        }
        if !COLLABORATOR_ROLES.iter().any(|(code, _)| *code == self.role) {
            errors.insert("role", "Выберите роль");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaborator_validation() {
        let form = CollaboratorForm {
            email: "chef.example.com".into(),
            business: "3".into(),
            role: "owner".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Некорректный email"));
        assert_eq!(errors.get("role"), Some("Выберите роль"));
        assert!(errors.get("business").is_none());
    }
}
