use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::{decimal_text, serialize_decimal, string_or_number};
use crate::domain::common::{EntityBase, EntityId, Resource};
use crate::shared::form::{FieldErrors, FormDraft};

/// Позиция меню заведения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(flatten)]
    pub base: EntityBase,

    pub business: EntityId,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub menu_type: Option<EntityId>,
    #[serde(default)]
    pub menu_type_name: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub price: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Resource for MenuItem {
    const ENDPOINT: &'static str = "/api/menu-items/";
    const TITLE: &'static str = "Меню заведений";

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

/// Массовая загрузка позиций из CSV (поле `data_file`)
pub const MENU_BULK_UPLOAD_PATH: &str = "/api/menu-items/bulk-upload/";
pub const MENU_BULK_UPLOAD_FIELD: &str = "data_file";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuItemForm {
    pub business: String,
    pub menu_type: String,
    pub name: String,
    pub description: String,
    /// Уходит на сервер с точкой: "12,5" → "12.5"
    #[serde(serialize_with = "serialize_decimal")]
    pub price: String,
}

impl FormDraft for MenuItemForm {
    type Entity = MenuItem;

    fn from_entity(entity: &MenuItem) -> Self {
        Self {
            business: entity.business.as_string(),
            menu_type: entity
                .menu_type
                .as_ref()
                .map(EntityId::as_string)
                .unwrap_or_default(),
            name: entity.name.clone(),
            description: entity.description.clone().unwrap_or_default(),
            price: entity.price.clone(),
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name);
        if EntityId::parse(&self.business).is_none() {
            errors.insert("business", "Выберите заведение");
        }
        match decimal_text(&self.price).parse::<f64>() {
            Ok(price) if price >= 0.0 => {}
            _ => errors.insert("price", "Цена должна быть неотрицательным числом"),
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_accepts_number_and_string() {
        let a: MenuItem =
            serde_json::from_str(r#"{"id":1,"business":2,"name":"Plov","price":35000}"#).unwrap();
        let b: MenuItem =
            serde_json::from_str(r#"{"id":2,"business":2,"name":"Tea","price":"4500.00"}"#).unwrap();
        assert_eq!(a.price, "35000");
        assert_eq!(b.price, "4500.00");
    }

    #[test]
    fn test_price_validation() {
        let mut form = MenuItemForm {
            business: "2".into(),
            name: "Plov".into(),
            price: "12,5".into(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());

        let body = serde_json::to_value(&form).unwrap();
        assert_eq!(body["price"], "12.5");

        form.price = "-1".into();
        assert!(form.validate().unwrap_err().get("price").is_some());

        form.price = "abc".into();
        assert!(form.validate().unwrap_err().get("price").is_some());
    }
}
