//! Загрузка страницы списка: данные, флаг загрузки, ручной `refetch`.
//!
//! Запросы не отменяются, но каждому выдаётся билет `RequestFence`: ответ
//! применяется только если после него не начинался более свежий запрос.
//! Так быстрые клики по пагинации не показывают устаревшую страницу.

use contracts::domain::common::Resource;
use contracts::shared::api::{decode_page, ApiError, Page};
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api::http::HttpTransport;
use crate::shared::api::{ApiRequest, ApiTransport};
use crate::shared::toast::ToastService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ticket(u64);

/// Счётчик поколений запросов
#[derive(Debug, Default)]
pub struct RequestFence {
    issued: u64,
}

impl RequestFence {
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }
}

/// GET страницы ресурса с параметрами списка
pub async fn fetch_page<R, T>(transport: &T, query: &ListQuery) -> Result<Page<R>, ApiError>
where
    R: Resource,
    T: ApiTransport,
{
    let request = ApiRequest::get(R::ENDPOINT).with_query(query.params());
    let body = transport.send(request).await?;
    decode_page(body)
}

/// Предел страниц при загрузке справочника целиком
const MAX_OPTION_PAGES: u32 = 200;

/// Все записи ресурса: страницы запрашиваются подряд, пока не набран `count`
pub async fn fetch_all<R, T>(transport: &T) -> Result<Vec<R>, ApiError>
where
    R: Resource,
    T: ApiTransport,
{
    let mut query = ListQuery::default();
    let mut rows = Vec::new();
    loop {
        let page = fetch_page::<R, T>(transport, &query).await?;
        let received = page.results.len();
        rows.extend(page.results);
        if received == 0 || rows.len() as u64 >= page.count || query.page >= MAX_OPTION_PAGES {
            return Ok(rows);
        }
        query = query.with_page(query.page + 1);
    }
}

pub struct RemoteList<R: Resource> {
    pub page: RwSignal<Page<R>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    fence: StoredValue<RequestFence>,
    toast: Option<ToastService>,
}

impl<R: Resource> Clone for RemoteList<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for RemoteList<R> {}

impl<R: Resource> RemoteList<R> {
    /// Повторить запрос с новыми параметрами.
    ///
    /// При ошибке предыдущая страница остаётся на экране.
    pub fn refetch<T: ApiTransport>(&self, transport: T, query: ListQuery) {
        // Страница уже закрыта: запрашивать некому
        let Some(ticket) = self.fence.try_update_value(RequestFence::issue) else {
            return;
        };
        self.loading.set(true);

        let this = *self;
        spawn_local(async move {
            let result = fetch_page::<R, T>(&transport, &query).await;

            // Страница могла быть закрыта, пока шёл запрос
            let current = this
                .fence
                .try_with_value(|fence| fence.is_current(ticket))
                .unwrap_or(false);
            if !current {
                log::debug!("{}: dropping superseded response", R::ENDPOINT);
                return;
            }

            match result {
                Ok(page) => {
                    this.page.set(page);
                    this.error.set(None);
                }
                Err(e) => {
                    log::error!("{}: failed to load page {}: {}", R::ENDPOINT, query.page, e);
                    if let Some(toast) = this.toast {
                        toast.error(e.user_message());
                    }
                    this.error.set(Some(e));
                }
            }
            this.loading.set(false);
        });
    }
}

/// Создать состояние списка и сразу загрузить первую выборку
pub fn use_remote_list<R, T>(transport: T, query: ListQuery) -> RemoteList<R>
where
    R: Resource,
    T: ApiTransport,
{
    let list = RemoteList {
        page: RwSignal::new(Page::default()),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
        fence: StoredValue::new(RequestFence::default()),
        toast: use_context::<ToastService>(),
    };
    list.refetch(transport, query);
    list
}

/// Варианты для select из всего справочника: (id, подпись)
pub fn use_options<R: Resource>(label: fn(&R) -> String) -> RwSignal<Vec<(String, String)>> {
    let options = RwSignal::new(Vec::new());
    let Some(transport) = use_context::<HttpTransport>() else {
        return options;
    };
    spawn_local(async move {
        match fetch_all::<R, _>(&transport).await {
            Ok(rows) => {
                options.try_set(rows.iter().map(|r| (r.id().as_string(), label(r))).collect());
            }
            Err(e) => log::error!("{}: failed to load options: {}", R::ENDPOINT, e),
        }
    });
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::mock::MockTransport;
    use crate::shared::api::Method;
    use contracts::domain::a002_category::aggregate::Category;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_fence_rejects_superseded_tickets() {
        let mut fence = RequestFence::default();
        let first = fence.issue();
        let second = fence.issue();

        // Ответ на первый запрос пришёл позже второго
        assert!(fence.is_current(second));
        assert!(!fence.is_current(first));

        let third = fence.issue();
        assert!(!fence.is_current(second));
        assert!(fence.is_current(third));
    }

    #[test]
    fn test_fetch_page_sends_query_params() {
        let transport = MockTransport::new().reply(
            Method::Get,
            "/api/categories/",
            Ok(json!({
                "status": true,
                "results": [{"id": 1, "name": "Desserts", "name_ru": "Десерты"}],
                "count": 1
            })),
        );
        let query = ListQuery::default().with_page(2).with_sort_toggled("name");

        let page = block_on(fetch_page::<Category, _>(&transport, &query)).unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.results[0].name, "Desserts");

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].query["page"], "2");
        assert_eq!(calls[0].query["ordering"], "name");
    }

    #[test]
    fn test_fetch_page_surfaces_application_error() {
        let transport = MockTransport::new().reply(
            Method::Get,
            "/api/categories/",
            Ok(json!({"status": false, "message": "Forbidden"})),
        );
        let err = block_on(fetch_page::<Category, _>(&transport, &ListQuery::default())).unwrap_err();
        assert_eq!(err.user_message(), "Forbidden");
    }

    fn category_page(ids: std::ops::RangeInclusive<i64>, count: u64) -> serde_json::Value {
        let results: Vec<_> = ids
            .map(|id| json!({"id": id, "name": format!("Category {}", id)}))
            .collect();
        json!({"status": true, "results": results, "count": count})
    }

    #[test]
    fn test_fetch_all_follows_count_across_pages() {
        let transport = MockTransport::new()
            .reply_with_query(Method::Get, "/api/categories/", &[("page", "1")], Ok(category_page(1..=15, 40)))
            .reply_with_query(Method::Get, "/api/categories/", &[("page", "2")], Ok(category_page(16..=30, 40)))
            .reply_with_query(Method::Get, "/api/categories/", &[("page", "3")], Ok(category_page(31..=40, 40)));

        let rows = block_on(fetch_all::<Category, _>(&transport)).unwrap();
        assert_eq!(rows.len(), 40);
        assert_eq!(rows[39].name, "Category 40");

        let pages: Vec<String> = transport.calls().iter().map(|c| c.query["page"].clone()).collect();
        assert_eq!(pages, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_fetch_all_stops_on_empty_page() {
        let transport = MockTransport::new()
            .reply_with_query(Method::Get, "/api/categories/", &[("page", "1")], Ok(category_page(1..=15, 40)))
            .reply_with_query(Method::Get, "/api/categories/", &[("page", "2")], Ok(category_page(1..=0, 40)));

        let rows = block_on(fetch_all::<Category, _>(&transport)).unwrap();
        assert_eq!(rows.len(), 15);
        assert_eq!(transport.calls().len(), 2);
    }
}
