//! Мутации записей: создание, изменение, удаление, действия и массовое удаление.

use contracts::domain::common::{EntityId, Resource};
use contracts::shared::api::{into_result, ApiError};
use futures::future::join_all;
use serde_json::Value;

use crate::shared::api::{ApiRequest, ApiTransport, FormPart, Payload};

pub async fn create<R, T>(transport: &T, payload: Payload) -> Result<Value, ApiError>
where
    R: Resource,
    T: ApiTransport,
{
    let request = ApiRequest::post(R::ENDPOINT).with_payload(payload);
    into_result(transport.send(request).await?)
}

pub async fn update<R, T>(transport: &T, id: &EntityId, payload: Payload) -> Result<Value, ApiError>
where
    R: Resource,
    T: ApiTransport,
{
    let request = ApiRequest::patch(R::detail_path(id)).with_payload(payload);
    into_result(transport.send(request).await?)
}

pub async fn delete<R, T>(transport: &T, id: &EntityId) -> Result<(), ApiError>
where
    R: Resource,
    T: ApiTransport,
{
    let request = ApiRequest::delete(R::detail_path(id));
    into_result(transport.send(request).await?).map(|_| ())
}

/// POST на `{ENDPOINT}{id}/{action}/`, например `approve`
pub async fn run_action<R, T>(transport: &T, id: &EntityId, action: &str) -> Result<Value, ApiError>
where
    R: Resource,
    T: ApiTransport,
{
    let request = ApiRequest::post(R::action_path(id, action));
    into_result(transport.send(request).await?)
}

/// Загрузка файла на произвольный эндпоинт (CSV-импорт)
pub async fn upload<T: ApiTransport>(transport: &T, path: &str, part: FormPart) -> Result<Value, ApiError> {
    let request = ApiRequest::post(path).with_payload(Payload::Multipart(vec![part]));
    into_result(transport.send(request).await?)
}

/// Итог массового удаления по каждой записи
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BulkDeleteOutcome {
    pub deleted: Vec<EntityId>,
    pub failed: Vec<(EntityId, ApiError)>,
}

impl BulkDeleteOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn summary(&self) -> String {
        let total = self.deleted.len() + self.failed.len();
        if self.is_complete() {
            format!("Удалено записей: {}", total)
        } else {
            format!(
                "Удалено {} из {}, ошибок: {}",
                self.deleted.len(),
                total,
                self.failed.len()
            )
        }
    }
}

/// Один DELETE на каждую запись, все параллельно.
///
/// Статус проверяется у каждого ответа; неудачи не прячутся за общим успехом.
pub async fn delete_many<R, T>(transport: &T, ids: Vec<EntityId>) -> BulkDeleteOutcome
where
    R: Resource,
    T: ApiTransport,
{
    let results = join_all(ids.into_iter().map(|id| async move {
        let result = delete::<R, T>(transport, &id).await;
        (id, result)
    }))
    .await;

    let mut outcome = BulkDeleteOutcome::default();
    for (id, result) in results {
        match result {
            Ok(()) => outcome.deleted.push(id),
            Err(e) => {
                log::error!("{}: failed to delete {}: {}", R::ENDPOINT, id, e);
                outcome.failed.push((id, e));
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::mock::MockTransport;
    use crate::shared::api::Method;
    use contracts::domain::a011_ad::aggregate::Ad;
    use futures::executor::block_on;
    use serde_json::json;

    fn ids(raw: &[i64]) -> Vec<EntityId> {
        raw.iter().copied().map(EntityId::Number).collect()
    }

    #[test]
    fn test_bulk_delete_issues_one_call_per_id() {
        let transport = MockTransport::new();
        let outcome = block_on(delete_many::<Ad, _>(&transport, ids(&[1, 2, 3])));

        assert_eq!(transport.count(Method::Delete), 3);
        let paths: Vec<String> = transport.calls().into_iter().map(|c| c.path).collect();
        assert_eq!(paths, vec!["/api/ads/1/", "/api/ads/2/", "/api/ads/3/"]);
        assert!(outcome.is_complete());
        assert_eq!(outcome.summary(), "Удалено записей: 3");
    }

    #[test]
    fn test_bulk_delete_reports_partial_failure() {
        let transport = MockTransport::new()
            .reply(
                Method::Delete,
                "/api/ads/2/",
                Err(ApiError::Transport("connection reset".into())),
            )
            .reply(
                Method::Delete,
                "/api/ads/3/",
                Ok(json!({"status": false, "message": "Ad is referenced"})),
            );

        let outcome = block_on(delete_many::<Ad, _>(&transport, ids(&[1, 2, 3])));

        assert_eq!(transport.count(Method::Delete), 3);
        assert!(!outcome.is_complete());
        assert_eq!(outcome.deleted, ids(&[1]));
        assert_eq!(outcome.failed.len(), 2);
        assert_eq!(outcome.summary(), "Удалено 1 из 3, ошибок: 2");
    }

    #[test]
    fn test_run_action_posts_to_action_path() {
        let transport = MockTransport::new();
        block_on(run_action::<Ad, _>(&transport, &EntityId::Number(5), "approve")).unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].method, Method::Post);
        assert_eq!(calls[0].path, "/api/ads/5/approve/");
    }

    #[test]
    fn test_falsy_status_on_update_is_error() {
        let transport = MockTransport::new().reply(
            Method::Patch,
            "/api/ads/5/",
            Ok(json!({"status": false})),
        );
        let result = block_on(update::<Ad, _>(
            &transport,
            &EntityId::Number(5),
            Payload::Json(json!({"priority": "1"})),
        ));
        assert!(matches!(result, Err(ApiError::Application { .. })));
    }
}
