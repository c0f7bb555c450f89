use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::string_or_number;
use crate::domain::common::{EntityBase, Resource};
use crate::shared::form::{FieldErrors, FormDraft};

/// Рекламный баннер на главной приложения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ad {
    #[serde(flatten)]
    pub base: EntityBase,

    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub priority: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Resource for Ad {
    const ENDPOINT: &'static str = "/api/ads/";
    const TITLE: &'static str = "Реклама";

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdForm {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub link: String,
    pub is_active: bool,
}

impl FormDraft for AdForm {
    type Entity = Ad;

    fn from_entity(entity: &Ad) -> Self {
        Self {
            title: entity.title.clone(),
            description: entity.description.clone().unwrap_or_default(),
            priority: entity.priority.clone(),
            link: entity.link.clone().unwrap_or_default(),
            is_active: entity.is_active,
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("title", &self.title);
        if self.priority.trim().parse::<u32>().is_err() {
            errors.insert("priority", "Приоритет должен быть целым числом");
        }
        let link = self.link.trim();
        if !link.is_empty() && !link.starts_with("http://") && !link.starts_with("https://") {
            errors.insert("link", "Ссылка должна начинаться с http:// или https://");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::changed_fields;
    use serde_json::json;

    #[test]
    fn test_priority_edit_diff_excludes_description() {
        let ad: Ad = serde_json::from_str(
            r#"{"id":9,"title":"Plov day","description":"Every Thursday","priority":2,"is_active":true}"#,
        )
        .unwrap();
        let baseline = AdForm::from_entity(&ad);
        let edited = AdForm {
            priority: "3".into(),
            ..baseline.clone()
        };

        let diff = changed_fields(&baseline, &edited).unwrap();
        assert_eq!(serde_json::Value::Object(diff), json!({"priority": "3"}));
    }

    #[test]
    fn test_link_must_be_absolute() {
        let form = AdForm {
            title: "Banner".into(),
            priority: "1".into(),
            link: "example.com".into(),
            ..Default::default()
        };
        assert!(form.validate().unwrap_err().get("link").is_some());
    }
}
