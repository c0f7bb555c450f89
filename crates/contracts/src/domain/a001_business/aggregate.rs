use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityBase, EntityId, Resource};
use crate::shared::form::{FieldErrors, FormDraft};

// ============================================================================
// Record
// ============================================================================

/// Заведение (ресторан, кафе) в справочнике
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    #[serde(flatten)]
    pub base: EntityBase,

    pub name: String,
    #[serde(default)]
    pub name_ru: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub owner_email: Option<String>,
    #[serde(default)]
    pub cuisines: Vec<EntityId>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl Resource for Business {
    const ENDPOINT: &'static str = "/api/businesses/";
    const TITLE: &'static str = "Заведения";

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

// ============================================================================
// Form
// ============================================================================

/// Форма заведения; логотип уходит отдельной частью multipart
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusinessForm {
    pub name: String,
    pub name_ru: String,
    pub address: String,
    pub phone: String,
}

impl FormDraft for BusinessForm {
    type Entity = Business;

    fn from_entity(entity: &Business) -> Self {
        Self {
            name: entity.name.clone(),
            name_ru: entity.name_ru.clone().unwrap_or_default(),
            address: entity.address.clone(),
            phone: entity.phone.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name);
        errors.require("address", &self.address);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_business() {
        let raw = r#"{
            "id": 12, "name": "Chaikhona", "address": "Main st. 1",
            "rating": 4.5, "is_approved": false, "cuisines": [1, 3],
            "created_at": "2024-02-01T10:00:00Z"
        }"#;
        let business: Business = serde_json::from_str(raw).unwrap();
        assert_eq!(business.id(), &EntityId::Number(12));
        assert_eq!(business.cuisines.len(), 2);
        assert!(!business.is_approved);
        assert_eq!(Business::action_path(business.id(), "approve"), "/api/businesses/12/approve/");
    }

    #[test]
    fn test_form_requires_name_and_address() {
        let errors = BusinessForm::default().validate().unwrap_err();
        assert!(errors.get("name").is_some());
        assert!(errors.get("address").is_some());
        assert!(errors.get("phone").is_none());
    }
}
