use serde::de::DeserializeOwned;

use super::{EntityBase, EntityId};

/// Связка "тип записи ↔ REST-ресурс".
///
/// `ENDPOINT` — коллекция со слешем на конце (`/api/categories/`);
/// детальный адрес строится как `{ENDPOINT}{id}/`.
pub trait Resource: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static {
    const ENDPOINT: &'static str;

    /// Заголовок списка в UI
    const TITLE: &'static str;

    fn base(&self) -> &EntityBase;

    fn id(&self) -> &EntityId {
        &self.base().id
    }

    fn detail_path(id: &EntityId) -> String {
        format!("{}{}/", Self::ENDPOINT, id)
    }

    /// Адрес действия над записью, например `approve`
    fn action_path(id: &EntityId, action: &str) -> String {
        format!("{}{}/{}/", Self::ENDPOINT, id, action)
    }
}
