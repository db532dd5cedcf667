//! Gateway Configuration
//!
//! One backend base URL for every operation, the per-request timeout and
//! the build mode that switches diagnostic logging on.

use std::time::Duration;

use url::Url;

use crate::error::{ApiError, ApiResult};

/// Re-export BuildMode from platform
pub use platform::build_mode::BuildMode;

/// Per-request timeout (10 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Backend API root, e.g. `http://localhost:3001/api` (no trailing slash)
    base_url: Url,
    /// Applied to every request
    pub timeout: Duration,
    /// Development mode logs every request/response
    pub build_mode: BuildMode,
}

impl GatewayConfig {
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }

    /// Development config (diagnostic logging on)
    pub fn development(base_url: &str) -> ApiResult<Self> {
        Self::builder()
            .base_url(base_url)
            .build_mode(BuildMode::Development)
            .build()
    }

    /// Production config (diagnostic logging off)
    pub fn production(base_url: &str) -> ApiResult<Self> {
        Self::builder()
            .base_url(base_url)
            .build_mode(BuildMode::Production)
            .build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of an API path such as `/students/3`
    pub fn endpoint(&self, path: &str) -> ApiResult<Url> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| ApiError::Config(format!("Invalid endpoint {joined}: {e}")))
    }
}

/// Builder for [`GatewayConfig`]
#[derive(Debug, Clone, Default)]
pub struct GatewayConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    build_mode: Option<BuildMode>,
}

impl GatewayConfigBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build_mode(mut self, build_mode: BuildMode) -> Self {
        self.build_mode = Some(build_mode);
        self
    }

    /// Validate and build
    ///
    /// ## Errors
    /// `ApiError::Config` when the base URL is missing, unparsable, not
    /// http(s), or the timeout is zero.
    pub fn build(self) -> ApiResult<GatewayConfig> {
        let raw = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ApiError::Config("Backend base URL is not set".to_string()))?;

        let base_url = Url::parse(raw.trim().trim_end_matches('/'))
            .map_err(|e| ApiError::Config(format!("Invalid backend base URL {raw}: {e}")))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "Unsupported backend URL scheme: {}",
                base_url.scheme()
            )));
        }
        if base_url.host().is_none() {
            return Err(ApiError::Config(format!(
                "Backend base URL has no host: {raw}"
            )));
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ApiError::Config("Request timeout must be positive".to_string()));
        }

        Ok(GatewayConfig {
            base_url,
            timeout,
            build_mode: self.build_mode.unwrap_or_default(),
        })
    }
}
