//! Transport Trait
//!
//! Interface for sending one resolved HTTP request. Implementation is in
//! the infrastructure layer; tests substitute an in-process fake.

use std::error::Error;
use std::time::Duration;

use http::{HeaderMap, Method, StatusCode};
use thiserror::Error;
use url::Url;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Fully resolved outgoing request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub timeout: Duration,
}

/// Response as received, whatever its status
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// No response was received
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("no response within {}s", .timeout.as_secs_f32())]
    Timeout {
        timeout: Duration,
        #[source]
        source: BoxError,
    },

    #[error("could not reach {url}")]
    Unreachable {
        url: String,
        #[source]
        source: BoxError,
    },
}

impl TransportError {
    #[inline]
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout { .. })
    }
}

/// HTTP transport trait
#[trait_variant::make(HttpTransport: Send)]
pub trait LocalHttpTransport {
    /// Send the request and return the response, regardless of its status
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
