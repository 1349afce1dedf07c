//! Request descriptors.
//!
//! An `ApiRequest<R>` says everything about one backend call (method, path,
//! query, body) and the type `R` its payload decodes into, without performing
//! it. Parameter placement mirrors the backend's conventions: `GET`
//! parameters travel as the query string, `POST` parameters as a JSON body.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// HTTP methods used by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl core::fmt::Display for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The untyped part of a request: what a transport needs to put it on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRequest {
    pub method: Method,
    /// Absolute path below the base URL, already percent-encoded.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RawRequest {
    /// First query value recorded for `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A typed request descriptor.
pub struct ApiRequest<R> {
    raw: RawRequest,
    response: PhantomData<fn() -> R>,
}

impl<R> core::fmt::Debug for ApiRequest<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.raw.method)
            .field("path", &self.raw.path)
            .field("query", &self.raw.query)
            .field("body", &self.raw.body)
            .finish()
    }
}

impl<R> ApiRequest<R> {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            raw: RawRequest {
                method,
                path: path.into(),
                query: Vec::new(),
                body: None,
            },
            response: PhantomData,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Flatten `params` into query pairs (see [`encode_query`]).
    pub fn with_query<P>(mut self, params: &P) -> ApiResult<Self>
    where
        P: Serialize + ?Sized,
    {
        self.raw.query.extend(encode_query(params)?);
        Ok(self)
    }

    pub fn with_query_pair(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.raw.query.push((key.into(), value.into()));
        self
    }

    pub fn with_body<P>(mut self, body: &P) -> ApiResult<Self>
    where
        P: Serialize + ?Sized,
    {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::encode(format!("{}: {}", self.raw.path, e)))?;
        self.raw.body = Some(value);
        Ok(self)
    }

    pub fn method(&self) -> Method {
        self.raw.method
    }

    pub fn path(&self) -> &str {
        &self.raw.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.raw.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.raw.body.as_ref()
    }

    pub fn raw(&self) -> &RawRequest {
        &self.raw
    }

    pub fn into_raw(self) -> RawRequest {
        self.raw
    }
}

impl<R: DeserializeOwned> ApiRequest<R> {
    /// Decode a payload returned for this request.
    pub fn decode(&self, payload: Value) -> ApiResult<R> {
        serde_json::from_value(payload)
            .map_err(|e| ApiError::decode(format!("{} {}: {}", self.raw.method, self.raw.path, e)))
    }
}

/// Flatten a parameter struct into query pairs.
///
/// `null` fields are dropped, scalars are rendered as plain strings, array
/// items repeat the key and nested objects are sent as JSON text.
pub fn encode_query<P>(params: &P) -> ApiResult<Vec<(String, String)>>
where
    P: Serialize + ?Sized,
{
    let value = serde_json::to_value(params).map_err(|e| ApiError::encode(e.to_string()))?;
    let mut pairs = Vec::new();
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                push_query_value(&mut pairs, &key, value);
            }
        }
        other => {
            return Err(ApiError::encode(format!(
                "query parameters must serialise to an object, got {other}"
            )));
        }
    }
    Ok(pairs)
}

fn push_query_value(pairs: &mut Vec<(String, String)>, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((key.to_string(), s)),
        Value::Bool(b) => pairs.push((key.to_string(), b.to_string())),
        Value::Number(n) => pairs.push((key.to_string(), n.to_string())),
        Value::Array(items) => {
            for item in items {
                push_query_value(pairs, key, item);
            }
        }
        object @ Value::Object(_) => pairs.push((key.to_string(), object.to_string())),
    }
}

/// Percent-encode an identifier so it occupies exactly one path segment.
pub fn path_segment(id: &impl core::fmt::Display) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}
