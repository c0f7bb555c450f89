//! Браузерный транспорт поверх `gloo-net`.

use contracts::shared::api::ApiError;
use gloo_net::http::{Request, RequestBuilder};
use serde_json::{json, Value};

use super::{ApiRequest, ApiTransport, FormPart, FormValue, Method, Payload};
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransport {
    base: String,
}

impl HttpTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Полный адрес запроса; query-строка собирается через `serde_qs`
    pub fn url(&self, request: &ApiRequest) -> Result<String, ApiError> {
        let mut url = format!("{}{}", self.base, request.path);
        if !request.query.is_empty() {
            let qs = serde_qs::to_string(&request.query)
                .map_err(|e| ApiError::Transport(format!("Failed to encode query: {}", e)))?;
            url.push('?');
            url.push_str(&qs);
        }
        Ok(url)
    }

    fn builder(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        };
        let builder = builder.header("Accept", "application/json");
        match storage::get_access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, ApiError> {
    let data = web_sys::FormData::new()
        .map_err(|e| ApiError::Transport(format!("Failed to create form data: {e:?}")))?;
    for part in parts {
        let appended = match &part.value {
            FormValue::Text(text) => data.append_with_str(&part.name, text),
            FormValue::File(file) => data.append_with_blob_and_filename(&part.name, file, &file.name()),
        };
        appended.map_err(|e| ApiError::Transport(format!("Failed to append {}: {e:?}", part.name)))?;
    }
    Ok(data)
}

impl ApiTransport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = self.url(&request)?;
        let builder = self.builder(request.method, &url);

        let prepared = match &request.payload {
            None => builder.build(),
            Some(Payload::Json(body)) => builder.json(body),
            // Content-Type с boundary выставляет сам браузер
            Some(Payload::Multipart(parts)) => builder.body(form_data(parts)?),
        }
        .map_err(|e| ApiError::Transport(format!("Failed to build request: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

        if text.trim().is_empty() {
            // 204 No Content на DELETE
            return if response.ok() {
                Ok(json!({ "status": true }))
            } else {
                Err(ApiError::Transport(format!("HTTP {}", status)))
            };
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(body) => Ok(body),
            Err(_) if !response.ok() => Err(ApiError::Transport(format!("HTTP {}", status))),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_url_with_query() {
        let transport = HttpTransport::new("https://api.example.com");
        let query = BTreeMap::from([
            ("page".to_string(), "2".to_string()),
            ("ordering".to_string(), "-name".to_string()),
        ]);
        let request = ApiRequest::get("/api/categories/").with_query(query);
        assert_eq!(
            transport.url(&request).unwrap(),
            "https://api.example.com/api/categories/?ordering=-name&page=2"
        );
        assert_eq!(
            transport.url(&ApiRequest::delete("/api/ads/3/")).unwrap(),
            "https://api.example.com/api/ads/3/"
        );
    }
}
