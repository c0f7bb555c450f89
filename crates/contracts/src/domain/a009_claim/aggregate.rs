use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityBase, EntityId, Resource};

/// Заявка пользователя на владение карточкой заведения.
///
/// Форм нет: админ только одобряет или удаляет заявку.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(flatten)]
    pub base: EntityBase,

    pub business: EntityId,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub document: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
}

impl Resource for Claim {
    const ENDPOINT: &'static str = "/api/claims/";
    const TITLE: &'static str = "Заявки на владение";

    fn base(&self) -> &EntityBase {
        &self.base
    }
}
