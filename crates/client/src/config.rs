//! Client configuration.

use std::time::Duration;

use reqwest::Url;

use crate::error::{ApiError, ApiResult};

pub const ENV_BASE_URL: &str = "SYSCONSOLE_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "SYSCONSOLE_TIMEOUT_MS";
pub const ENV_ACCESS_TOKEN: &str = "SYSCONSOLE_ACCESS_TOKEN";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(15_000);
pub const DEFAULT_USER_AGENT: &str = concat!("sysconsole-client/", env!("CARGO_PKG_VERSION"));

/// Where the backend lives and how to talk to it.
#[derive(Clone)]
pub struct ClientConfig {
    /// Origin (plus optional prefix) that endpoint paths are appended to.
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
    /// Sent verbatim in the `Authorization` header when present.
    pub access_token: Option<String>,
}

impl core::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            access_token: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build from `SYSCONSOLE_*` environment variables.
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, test fixtures, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ApiResult<Self> {
        let base_url = lookup(ENV_BASE_URL).unwrap_or_else(|| {
            tracing::warn!("{ENV_BASE_URL} not set; using {DEFAULT_BASE_URL}");
            DEFAULT_BASE_URL.to_string()
        });
        let mut config = Self::new(&base_url)?;

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|e| ApiError::config(format!("{ENV_TIMEOUT_MS}={raw:?}: {e}")))?;
            if millis == 0 {
                return Err(ApiError::config(format!("{ENV_TIMEOUT_MS} must be positive")));
            }
            config.timeout = Duration::from_millis(millis);
        }

        config.access_token = lookup(ENV_ACCESS_TOKEN).filter(|t| !t.trim().is_empty());
        Ok(config)
    }

    /// Join an endpoint path onto the base URL, keeping any base prefix.
    pub fn endpoint_url(&self, path: &str) -> ApiResult<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{base}/{path}"))
            .map_err(|e| ApiError::config(format!("cannot build URL for {path:?}: {e}")))
    }
}

fn parse_base_url(raw: &str) -> ApiResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| ApiError::config(format!("base URL {raw:?}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::config(format!("base URL scheme must be http or https, got {other:?}"))),
    }
}
