//! HTTP client wrapper shared by every backend call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requests pick up the persisted bearer token on the way out. Responses with
//! status 401 wipe the persisted session and force a full page load of
//! `/login` before the error reaches the caller, independent of whatever the
//! caller does with it.
//!
//! Client-side (hydrate): requests go through `gloo-net` with
//! `credentials: include`. Server-side (SSR): the transport reports itself
//! unavailable.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::error::ApiError;
use crate::config::ClientConfig;
use crate::router::LOGIN_PATH;
use crate::util::navigation::Navigator;
use crate::util::storage::{self, KeyValueStore, TOKEN_KEY};

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Fully prepared outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Value>,
    /// Send cookies cross-origin (`credentials: include`).
    pub include_credentials: bool,
}

impl HttpRequest {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// Decoded JSON body; `Null` when empty, a JSON string when not JSON.
    pub body: Value,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Wire-level sender. Only transport failures are errors here; any received
/// response, whatever its status, is `Ok`.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser `fetch` transport.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        if request.include_credentials {
            builder = builder.credentials(web_sys::RequestCredentials::Include);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = prepared.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body: parse_body(&text) })
    }
}

/// Transport used during SSR, where backend calls are never made.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableTransport;

#[async_trait(?Send)]
impl Transport for UnavailableTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// The transport appropriate for the current build.
#[must_use]
pub fn default_transport() -> Arc<dyn Transport> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(FetchTransport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(UnavailableTransport)
    }
}

/// Decode a response body. Empty bodies become `Null`; non-JSON text is kept
/// as a JSON string.
#[must_use]
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

pub struct HttpClient {
    config: ClientConfig,
    default_headers: Mutex<BTreeMap<String, String>>,
    transport: Arc<dyn Transport>,
    storage: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
}

impl HttpClient {
    #[must_use]
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        storage: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned());
        Self { config, default_headers: Mutex::new(headers), transport, storage, navigator }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Header sent with every subsequent request.
    pub fn set_default_header(&self, name: &str, value: &str) {
        if let Ok(mut headers) = self.default_headers.lock() {
            headers.insert(name.to_owned(), value.to_owned());
        }
    }

    pub fn remove_default_header(&self, name: &str) {
        if let Ok(mut headers) = self.default_headers.lock() {
            headers.remove(name);
        }
    }

    #[must_use]
    pub fn default_header(&self, name: &str) -> Option<String> {
        self.default_headers.lock().ok()?.get(name).cloned()
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when no response arrives and
    /// `ApiError::Status` for non-2xx responses.
    pub async fn get(&self, path: &str) -> Result<HttpResponse, ApiError> {
        self.send(Method::Get, path, None).await
    }

    /// `POST path` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Same as [`HttpClient::get`].
    pub async fn post(&self, path: &str, body: Option<Value>) -> Result<HttpResponse, ApiError> {
        self.send(Method::Post, path, body).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> Result<HttpResponse, ApiError> {
        let request = self.prepare(method, path, body);
        let result = self.transport.send(request).await;
        self.inspect(result)
    }

    /// Outgoing hook: merge default headers and attach the persisted token.
    fn prepare(&self, method: Method, path: &str, body: Option<Value>) -> HttpRequest {
        let mut headers = self.default_headers.lock().map(|h| h.clone()).unwrap_or_default();
        if let Some(token) = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty()) {
            headers.insert(AUTHORIZATION.to_owned(), bearer(&token));
        }
        HttpRequest { method, url: self.config.endpoint(path), headers, body, include_credentials: true }
    }

    /// Incoming hook: map non-2xx to errors and handle 401 globally.
    fn inspect(&self, result: Result<HttpResponse, ApiError>) -> Result<HttpResponse, ApiError> {
        let resp = result?;
        if resp.is_success() {
            return Ok(resp);
        }
        let err = ApiError::Status { status: resp.status, body: resp.body };
        if err.is_unauthorized() {
            self.expire_session();
        }
        Err(err)
    }

    fn expire_session(&self) {
        log::info!("received 401, clearing persisted session");
        storage::clear_session(self.storage.as_ref());
        if self.navigator.current_path() != LOGIN_PATH {
            self.navigator.assign(LOGIN_PATH);
        }
    }
}

/// `Bearer <token>` header value.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
