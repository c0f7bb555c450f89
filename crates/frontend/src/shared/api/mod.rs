//! Транспортный шов между UI и REST API.
//!
//! Вся бизнес-логика (списки, диалоги, массовое удаление) работает через
//! `ApiTransport`, поэтому её можно гонять в тестах без браузера.

pub mod http;
#[cfg(test)]
pub mod mock;

use contracts::shared::api::ApiError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

#[derive(Debug, Clone)]
pub enum FormValue {
    Text(String),
    File(web_sys::File),
}

/// Одна часть `multipart/form-data`
#[derive(Debug, Clone)]
pub struct FormPart {
    pub name: String,
    pub value: FormValue,
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::Text(value.into()),
        }
    }

    pub fn file(name: impl Into<String>, file: web_sys::File) -> Self {
        Self {
            name: name.into(),
            value: FormValue::File(file),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Payload {
    Json(Value),
    Multipart(Vec<FormPart>),
}

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub payload: Option<Payload>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: BTreeMap::new(),
            payload: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = query;
        self
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Отправка одного запроса.
///
/// Возвращает JSON-тело как есть; проверку `status` делает вызывающий код
/// через `contracts::shared::api::into_result`. Отмены нет: начатый запрос
/// всегда доходит до конца.
pub trait ApiTransport: Clone + Send + Sync + 'static {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<Value, ApiError>>;
}
