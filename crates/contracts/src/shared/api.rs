//! Конверт ответа REST API и таксономия ошибок.
//!
//! Сервер отвечает `{ status, message?, ...data }` и сигнализирует об ошибке
//! полем `status`, а не HTTP-кодом. Здесь это поле превращается в `Result`,
//! чтобы вызывающий код работал с `?` и `match`, а не проверял флаг вручную.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::form::FieldErrors;
use super::upload::UploadError;

/// Сообщение по умолчанию, когда сервер не прислал `message`
pub const GENERIC_ERROR_MESSAGE: &str = "Что-то пошло не так. Попробуйте ещё раз.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Форма не прошла проверку, запрос не отправлялся
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// Сервер ответил `status: false`
    #[error("{message}")]
    Application { message: String },

    /// Сеть недоступна или ответ не JSON
    #[error("transport error: {0}")]
    Transport(String),

    /// Тело ответа не совпало с ожидаемой схемой
    #[error("unexpected response: {0}")]
    Decode(String),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl ApiError {
    /// Текст для toast-уведомления
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Application { message } => message.clone(),
            ApiError::Validation(_) => "Проверьте выделенные поля".to_string(),
            ApiError::Upload(e) => e.to_string(),
            ApiError::Transport(_) | ApiError::Decode(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Одна страница списка: `results` — текущая страница, `count` — всего записей
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub count: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
        }
    }
}

/// JS-подобная истинность поля `status`
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Проверить конверт ответа.
///
/// Возвращает тело целиком, если `status` истинен; иначе `Application`
/// с сообщением сервера или общим текстом.
pub fn into_result(body: Value) -> Result<Value, ApiError> {
    let Value::Object(map) = &body else {
        return Err(ApiError::Decode("response body is not an object".to_string()));
    };

    if map.get("status").map(is_truthy).unwrap_or(false) {
        return Ok(body);
    }

    let message = map
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(GENERIC_ERROR_MESSAGE)
        .to_string();
    Err(ApiError::Application { message })
}

/// Проверить конверт и разобрать страницу списка
pub fn decode_page<T: DeserializeOwned>(body: Value) -> Result<Page<T>, ApiError> {
    let body = into_result(body)?;
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthy_status_passes_body_through() {
        let body = json!({"status": true, "id": 5});
        assert_eq!(into_result(body.clone()), Ok(body));
        assert!(into_result(json!({"status": 1})).is_ok());
        assert!(into_result(json!({"status": "ok"})).is_ok());
    }

    #[test]
    fn test_falsy_status_is_application_error() {
        let err = into_result(json!({"status": false, "message": "Name taken"})).unwrap_err();
        assert_eq!(
            err,
            ApiError::Application {
                message: "Name taken".into()
            }
        );
        assert_eq!(err.user_message(), "Name taken");
    }

    #[test]
    fn test_missing_status_or_message_uses_fallback() {
        let err = into_result(json!({"detail": "nope"})).unwrap_err();
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);

        let err = into_result(json!({"status": false, "message": "  "})).unwrap_err();
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_non_object_body_is_decode_error() {
        assert!(matches!(into_result(json!([1, 2])), Err(ApiError::Decode(_))));
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_decode_page() {
        let page: Page<Row> =
            decode_page(json!({"status": true, "results": [{"id": 1}, {"id": 2}], "count": 40}))
                .unwrap();
        assert_eq!(page.results, vec![Row { id: 1 }, Row { id: 2 }]);
        assert_eq!(page.count, 40);

        let bad = decode_page::<Row>(json!({"status": true, "results": [{"name": "x"}]}));
        assert!(matches!(bad, Err(ApiError::Decode(_))));
    }
}
