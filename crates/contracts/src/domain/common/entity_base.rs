use serde::{Deserialize, Serialize};

use super::EntityId;

/// Общая часть всех записей справочника.
///
/// Временные метки только для чтения: клиент их показывает, но не отправляет.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityBase {
    pub id: EntityId,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub modified_at: Option<String>,
}

impl EntityBase {
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            created_at: None,
            modified_at: None,
        }
    }
}
