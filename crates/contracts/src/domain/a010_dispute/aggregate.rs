use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityBase, Resource};
use crate::shared::form::{FieldErrors, FormDraft};

/// Обращение пользователя (спор по отзыву, карточке и т.п.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    #[serde(flatten)]
    pub base: EntityBase,

    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub is_resolved: bool,
}

impl Resource for Dispute {
    const ENDPOINT: &'static str = "/api/disputes/";
    const TITLE: &'static str = "Обращения";

    fn base(&self) -> &EntityBase {
        &self.base
    }
}

/// Ответ администратора на обращение
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisputeReplyForm {
    pub reply: String,
    pub is_resolved: bool,
}

impl FormDraft for DisputeReplyForm {
    type Entity = Dispute;

    fn from_entity(entity: &Dispute) -> Self {
        Self {
            reply: entity.reply.clone().unwrap_or_default(),
            is_resolved: entity.is_resolved,
        }
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("reply", &self.reply);
        errors.into_result()
    }
}
