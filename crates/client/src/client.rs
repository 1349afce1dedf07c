//! `ConsoleClient`: executes request descriptors against a transport.
//!
//! The per-endpoint methods live next to their descriptors in `crate::api`.

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::request::ApiRequest;
use crate::transport::{ReqwestTransport, Transport};

/// Typed client for the admin-console backend. Cheap to clone.
pub struct ConsoleClient<T = ReqwestTransport> {
    transport: Arc<T>,
}

impl<T> Clone for ConsoleClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl ConsoleClient<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        Ok(Self::with_transport(ReqwestTransport::new(config)?))
    }

    /// Client configured from `SYSCONSOLE_*` environment variables.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Replace (or clear) the access token used for subsequent calls.
    pub fn set_access_token(&self, token: Option<String>) {
        self.transport.set_access_token(token);
    }

    pub fn access_token(&self) -> Option<String> {
        self.transport.access_token()
    }
}

impl<T: Transport> ConsoleClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a descriptor and decode its payload.
    ///
    /// Errors from the transport are returned unchanged.
    pub async fn execute<R>(&self, request: ApiRequest<R>) -> ApiResult<R>
    where
        R: DeserializeOwned,
    {
        let request_id = Uuid::now_v7();
        let span = tracing::debug_span!(
            "sysapi.request",
            method = %request.method(),
            path = %request.path(),
            %request_id,
        );

        async move {
            let started = Instant::now();
            tracing::debug!("sending request");

            let result = self.transport.send(request.raw(), request_id).await;
            let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

            match &result {
                Ok(_) => tracing::debug!(elapsed_ms, "request completed"),
                Err(ApiError::Business { code, msg }) => {
                    tracing::warn!(elapsed_ms, code, "backend rejected request: {}", msg)
                }
                Err(e) => tracing::warn!(elapsed_ms, "request failed: {}", e),
            }

            request.decode(result?)
        }
        .instrument(span)
        .await
    }
}
