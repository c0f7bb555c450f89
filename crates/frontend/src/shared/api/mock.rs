//! Записывающий транспорт для тестов.

use contracts::shared::api::ApiError;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use super::{ApiRequest, ApiTransport, FormValue, Method, Payload};

/// Снимок отправленного запроса; файлы записываются как `<file>`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub json: Option<Value>,
    pub form_fields: Vec<(String, String)>,
}

type Reply = Result<Value, ApiError>;

struct Canned {
    method: Method,
    path: String,
    /// Параметры, которые должны быть в запросе
    query: Vec<(String, String)>,
    reply: Reply,
}

impl Canned {
    fn matches(&self, request: &ApiRequest) -> bool {
        self.method == request.method
            && self.path == request.path
            && self
                .query
                .iter()
                .all(|(k, v)| request.query.get(k) == Some(v))
    }
}

#[derive(Clone, Default)]
pub struct MockTransport {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    replies: Arc<Mutex<Vec<Canned>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ответ на конкретный метод и путь; без настройки `{"status": true}`
    pub fn reply(self, method: Method, path: &str, reply: Reply) -> Self {
        self.reply_with_query(method, path, &[], reply)
    }

    /// То же, но только для запросов с данными параметрами (например, `page`)
    pub fn reply_with_query(self, method: Method, path: &str, query: &[(&str, &str)], reply: Reply) -> Self {
        self.replies.lock().unwrap().push(Canned {
            method,
            path: path.to_string(),
            query: query.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            reply,
        });
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method) -> usize {
        self.calls().iter().filter(|c| c.method == method).count()
    }
}

impl ApiTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let (json, form_fields) = match &request.payload {
            None => (None, Vec::new()),
            Some(Payload::Json(body)) => (Some(body.clone()), Vec::new()),
            Some(Payload::Multipart(parts)) => (
                None,
                parts
                    .iter()
                    .map(|p| match &p.value {
                        FormValue::Text(t) => (p.name.clone(), t.clone()),
                        FormValue::File(_) => (p.name.clone(), "<file>".to_string()),
                    })
                    .collect(),
            ),
        };
        self.calls.lock().unwrap().push(RecordedCall {
            method: request.method,
            path: request.path.clone(),
            query: request.query.clone(),
            json,
            form_fields,
        });

        self.replies
            .lock()
            .unwrap()
            .iter()
            .find(|canned| canned.matches(&request))
            .map(|canned| canned.reply.clone())
            .unwrap_or_else(|| Ok(json!({ "status": true })))
    }
}
