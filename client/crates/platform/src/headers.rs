//! Request header utilities
//!
//! Common headers sent with every backend request, and bearer
//! `Authorization` construction.

use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

/// `X-Requested-With` marks the request as an XHR-style API call
pub const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");
const XML_HTTP_REQUEST: HeaderValue = HeaderValue::from_static("XMLHttpRequest");
const BEARER_PREFIX: &str = "Bearer ";

/// Error when building a header value
#[derive(Debug, Clone, thiserror::Error)]
pub enum HeaderError {
    #[error("Bearer token contains characters not allowed in a header")]
    InvalidToken,
}

/// Headers every backend request carries
///
/// `Accept` and `Content-Type` are JSON, plus `X-Requested-With`.
pub fn default_json_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(4);
    headers.insert(ACCEPT, APPLICATION_JSON);
    headers.insert(CONTENT_TYPE, APPLICATION_JSON);
    headers.insert(X_REQUESTED_WITH, XML_HTTP_REQUEST);
    headers
}

/// Build an `Authorization: Bearer <token>` header value
///
/// The value is marked sensitive so it is redacted from `Debug` output.
///
/// ## Returns
/// * `Ok(HeaderValue)` - Header value ready to insert
/// * `Err(HeaderError)` - Token contains bytes invalid in a header (e.g. newline)
pub fn bearer_authorization(token: &str) -> Result<HeaderValue, HeaderError> {
    let mut value = HeaderValue::try_from(format!("{BEARER_PREFIX}{token}"))
        .map_err(|_| HeaderError::InvalidToken)?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_json_headers() {
        let headers = default_json_headers();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(X_REQUESTED_WITH).unwrap(), "XMLHttpRequest");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_bearer_authorization() {
        let value = bearer_authorization("abc.def").unwrap();
        assert_eq!(value, "Bearer abc.def");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_bearer_rejects_newline() {
        let result = bearer_authorization("abc\ndef");
        assert!(matches!(result, Err(HeaderError::InvalidToken)));
    }
}
