//! LMS Client Error Types
//!
//! This module provides gateway and session error variants that integrate
//! with the unified `kernel::error::AppError` system.

use http::StatusCode;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::storage::StorageError;
use thiserror::Error;

use crate::domain::transport::TransportError;

/// Gateway result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Session store write failures
///
/// Reads never fail: unreadable or malformed entries count as absent.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Underlying storage rejected the write
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    /// User record could not be serialized
    #[error("Failed to serialize user record: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Failure of a gateway operation
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response received (connection refused, DNS, timeout)
    #[error("Network failure: {0}")]
    Network(#[from] TransportError),

    /// Backend answered 401; the session has already been cleared
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String, body: String },

    /// Backend answered with any other non-2xx status
    #[error("Request failed with status {status}: {message}")]
    Http {
        status: StatusCode,
        message: String,
        body: String,
    },

    /// Response body was not the expected JSON
    #[error("Failed to decode response body: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// Request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Gateway misconfiguration (detected at startup or when resolving a URL)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Session could not be persisted after login/register
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// HTTP status received, if any
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            ApiError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(e) if e.is_timeout() => ErrorKind::Timeout,
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::Unauthorized { .. } => ErrorKind::Unauthorized,
            ApiError::Http { status, .. } => ErrorKind::from_status(status.as_u16()),
            ApiError::Deserialization(_) | ApiError::Encode(_) => ErrorKind::Decode,
            ApiError::Config(_) => ErrorKind::Config,
            ApiError::Session(_) => ErrorKind::Storage,
        }
    }

    /// Message suitable for display
    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthorized { message, .. } | ApiError::Http { message, .. } => {
                message.clone()
            }
            other => other.to_string(),
        }
    }

    #[inline]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = match self.status_code() {
            Some(status) => AppError::from_status(status.as_u16(), self.message()),
            None => AppError::new(self.kind(), self.message()),
        };
        match self.kind() {
            ErrorKind::Unauthorized => err.with_action("Please sign in again"),
            ErrorKind::Forbidden => err.with_action("Ask an administrator for access"),
            ErrorKind::Network | ErrorKind::Timeout => {
                err.with_action("Check your connection and try again")
            }
            _ => err,
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            ApiError::Network(e) => {
                tracing::warn!(error = %e, "Backend unreachable");
            }
            ApiError::Http { status, message, .. } if status.is_server_error() => {
                tracing::error!(status = status.as_u16(), message = %message, "Backend error");
            }
            ApiError::Deserialization(e) => {
                tracing::error!(error = %e, "Unexpected response body");
            }
            ApiError::Session(e) => {
                tracing::error!(error = %e, "Failed to persist session");
            }
            _ => {
                tracing::debug!(error = %self, "API error");
            }
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        err.to_app_error().with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn io_source() -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(std::io::Error::from(std::io::ErrorKind::ConnectionRefused))
    }

    #[test]
    fn test_kind_mapping() {
        let timeout = ApiError::Network(TransportError::Timeout {
            timeout: Duration::from_secs(10),
            source: io_source(),
        });
        assert_eq!(timeout.kind(), ErrorKind::Timeout);
        assert_eq!(timeout.status_code(), None);

        let refused = ApiError::Network(TransportError::Unreachable {
            url: "http://localhost:3001/api/status".into(),
            source: io_source(),
        });
        assert_eq!(refused.kind(), ErrorKind::Network);

        let not_found = ApiError::Http {
            status: StatusCode::NOT_FOUND,
            message: "Question not found".into(),
            body: String::new(),
        };
        assert_eq!(not_found.kind(), ErrorKind::NotFound);
        assert_eq!(not_found.status_code(), Some(StatusCode::NOT_FOUND));
    }

    #[test]
    fn test_to_app_error() {
        let err = ApiError::Unauthorized {
            message: "Invalid token".into(),
            body: String::new(),
        };
        let app = err.to_app_error();
        assert_eq!(app.status_code(), Some(401));
        assert_eq!(app.message(), "Invalid token");
        assert_eq!(app.action(), Some("Please sign in again"));

        let app: AppError = ApiError::Http {
            status: StatusCode::BAD_GATEWAY,
            message: "Bad Gateway".into(),
            body: String::new(),
        }
        .into();
        assert_eq!(app.status_code(), Some(502));
        assert!(std::error::Error::source(&app).is_some());
    }
}
