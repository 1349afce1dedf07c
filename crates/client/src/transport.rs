//! Transports: the shared request utility every operation delegates to.
//!
//! A transport puts a [`RawRequest`] on the wire and returns the envelope's
//! `data` payload. It owns transport details only: headers, HTTP status
//! mapping and envelope unwrapping. Typed decoding happens in the client.

use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, STATUS_BODY_PREVIEW_CHARS};
use crate::request::{Method, RawRequest};

/// Envelope code the backend uses for success.
pub const SUCCESS_CODE: i64 = 200;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return the unwrapped payload.
    async fn send(&self, request: &RawRequest, request_id: Uuid) -> ApiResult<Value>;
}

/// The backend's `{ code, msg, data }` wrapper.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// The payload on success, the backend's code and message otherwise.
    pub fn into_result(self) -> ApiResult<Value> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ApiError::Business {
                code: self.code,
                msg: self.msg.unwrap_or_default(),
            })
        }
    }
}

/// Parse a response body as an envelope and unwrap it.
pub fn unwrap_envelope(body: &[u8]) -> ApiResult<Value> {
    let envelope: Envelope = serde_json::from_slice(body).map_err(|e| {
        ApiError::decode(format!("invalid response envelope ({e}): {}", body_preview(body)))
    })?;
    envelope.into_result()
}

/// Reqwest-backed transport with one shared connection pool.
pub struct ReqwestTransport {
    client: Client,
    config: ClientConfig,
    access_token: RwLock<Option<String>>,
}

impl core::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestTransport {
    /// Build a transport with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::config(format!("cannot build HTTP client: {e}")))?;
        let access_token = RwLock::new(config.access_token.clone());
        Ok(Self {
            client,
            config,
            access_token,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace (or clear) the token sent with subsequent requests.
    pub fn set_access_token(&self, token: Option<String>) {
        let mut guard = self
            .access_token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = token;
    }

    pub fn access_token(&self) -> Option<String> {
        self.access_token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &RawRequest, request_id: Uuid) -> ApiResult<Value> {
        let url = self.config.endpoint_url(&request.path)?;
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, self.config.user_agent.as_str())
            .header(REQUEST_ID_HEADER, request_id.to_string());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = self.access_token() {
            builder = builder.header(AUTHORIZATION, token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: body_preview(&body),
            });
        }

        unwrap_envelope(&body)
    }
}

/// Whitespace-collapsed prefix of a response body, at most
/// [`STATUS_BODY_PREVIEW_CHARS`] chars plus `...` when cut.
fn body_preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let mut preview = String::with_capacity(STATUS_BODY_PREVIEW_CHARS);
    let mut len = 0;

    for (i, word) in text.split_whitespace().enumerate() {
        let separator = (i > 0).then_some(' ');
        for c in separator.into_iter().chain(word.chars()) {
            if len == STATUS_BODY_PREVIEW_CHARS {
                preview.push_str("...");
                return preview;
            }
            preview.push(c);
            len += 1;
        }
    }
    preview
}
