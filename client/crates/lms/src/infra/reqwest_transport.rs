//! reqwest Transport
//!
//! `HttpTransport` over a shared `reqwest::Client` (rustls). The timeout
//! is applied per request from the gateway configuration.

use crate::domain::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build the underlying client
    ///
    /// ## Errors
    /// `ApiError::Config` if the TLS backend cannot be initialized.
    pub fn new() -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("lms/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let timeout = request.timeout;
        let url = request.url.to_string();

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .timeout(timeout);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let classify = |e: reqwest::Error| {
            if e.is_timeout() {
                TransportError::Timeout {
                    timeout,
                    source: Box::new(e),
                }
            } else {
                TransportError::Unreachable {
                    url: url.clone(),
                    source: Box::new(e),
                }
            }
        };

        let response = builder.send().await.map_err(classify)?;
        let status = response.status();
        let body = response.bytes().await.map_err(classify)?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
