//! API Gateway
//!
//! Turns an operation into one HTTP request against the configured backend,
//! attaches the session's bearer token, and normalizes failures into
//! [`ApiError`]. A 401 clears the session and queues a login redirect
//! before the error reaches the caller. Nothing is retried.

use std::sync::Arc;

use http::header::AUTHORIZATION;
use http::{Method, StatusCode};
use platform::headers::{bearer_authorization, default_json_headers};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::application::answers::AnswerService;
use crate::application::auth::AuthService;
use crate::application::config::GatewayConfig;
use crate::application::navigation::Navigation;
use crate::application::questions::QuestionService;
use crate::application::server_status::ServerStatusService;
use crate::application::session::SessionStore;
use crate::application::students::StudentService;
use crate::domain::entity::envelope::DataEnvelope;
use crate::domain::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::error::{ApiError, ApiResult};

/// Whether the session token is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Bearer,
    Anonymous,
}

/// One operation's request before URL and header resolution
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    method: Method,
    path: String,
    access: Access,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            access: Access::Bearer,
            body: None,
        }
    }

    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub(crate) fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub(crate) fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Never attach the bearer token
    pub(crate) fn anonymous(mut self) -> Self {
        self.access = Access::Anonymous;
        self
    }

    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        self.body = Some(serde_json::to_vec(body).map_err(ApiError::Encode)?);
        Ok(self)
    }
}

/// Gateway to the LMS backend
pub struct ApiGateway<T> {
    transport: T,
    session: Arc<SessionStore>,
    navigation: Arc<Navigation>,
    config: Arc<GatewayConfig>,
}

impl<T> std::fmt::Debug for ApiGateway<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiGateway")
            .field("base_url", &self.config.base_url().as_str())
            .field("timeout", &self.config.timeout)
            .field("build_mode", &self.config.build_mode)
            .finish_non_exhaustive()
    }
}

impl<T: HttpTransport> ApiGateway<T> {
    pub fn new(
        transport: T,
        session: Arc<SessionStore>,
        navigation: Arc<Navigation>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            transport,
            session,
            navigation,
            config: Arc::new(config),
        }
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn navigation(&self) -> &Arc<Navigation> {
        &self.navigation
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn auth(&self) -> AuthService<'_, T> {
        AuthService::new(self)
    }

    pub fn students(&self) -> StudentService<'_, T> {
        StudentService::new(self)
    }

    pub fn questions(&self) -> QuestionService<'_, T> {
        QuestionService::new(self)
    }

    pub fn answers(&self) -> AnswerService<'_, T> {
        AnswerService::new(self)
    }

    pub fn server_status(&self) -> ServerStatusService<'_, T> {
        ServerStatusService::new(self)
    }

    /// Send the request and return the body of a 2xx response
    pub(crate) async fn execute(&self, request: ApiRequest) -> ApiResult<Vec<u8>> {
        let diagnostics = self.config.build_mode.is_development();
        let url = self.config.endpoint(&request.path)?;

        let mut headers = default_json_headers();
        let token = match request.access {
            Access::Bearer => self.session.token(),
            Access::Anonymous => None,
        };
        if let Some(token) = token {
            match bearer_authorization(&token) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Stored token is not a valid header, sending without it");
                }
            }
        }

        if diagnostics {
            tracing::debug!(
                method = %request.method,
                url = %url,
                authenticated = headers.contains_key(AUTHORIZATION),
                "API request"
            );
        }

        let outgoing = HttpRequest {
            method: request.method.clone(),
            url,
            headers,
            body: request.body,
            timeout: self.config.timeout,
        };

        let response = match self.transport.send(outgoing).await {
            Ok(response) => response,
            Err(e) => {
                let err = ApiError::Network(e);
                if diagnostics {
                    tracing::debug!(method = %request.method, path = %request.path, error = %err, "API request failed");
                }
                err.log();
                return Err(err);
            }
        };

        if diagnostics {
            tracing::debug!(
                method = %request.method,
                path = %request.path,
                status = response.status.as_u16(),
                bytes = response.body.len(),
                "API response"
            );
        }

        if response.status.is_success() {
            return Ok(response.body);
        }

        let err = self.failure(response);
        err.log();
        Err(err)
    }

    /// Send and decode the whole body
    pub(crate) async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<R> {
        let body = self.execute(request).await?;
        decode(&body)
    }

    /// Send and decode the `data` field of a `{ "data": ... }` body
    pub(crate) async fn fetch_data<R: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<R> {
        let envelope: DataEnvelope<R> = self.fetch(request).await?;
        Ok(envelope.data)
    }

    /// Send and ignore the body
    pub(crate) async fn send(&self, request: ApiRequest) -> ApiResult<()> {
        self.execute(request).await.map(drop)
    }

    fn failure(&self, response: HttpResponse) -> ApiError {
        let body = String::from_utf8_lossy(&response.body).into_owned();
        let message = error_message(&body, response.status);

        if response.status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
            return ApiError::Unauthorized { message, body };
        }

        ApiError::Http {
            status: response.status,
            message,
            body,
        }
    }

    /// Clear the session, then queue the login redirect
    fn handle_unauthorized(&self) {
        if let Err(e) = self.session.clear_session() {
            tracing::error!(error = %e, "Failed to clear session after 401");
        }
        self.navigation.request_login_redirect();
    }
}

fn decode<R: DeserializeOwned>(body: &[u8]) -> ApiResult<R> {
    serde_json::from_slice(body).map_err(|e| {
        let err = ApiError::Deserialization(e);
        err.log();
        err
    })
}

/// Backend's `error` (or `message`) field, else the canonical reason
fn error_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .iter()
                .find_map(|key| value.get(key)?.as_str().map(str::to_owned))
        })
        .filter(|message| !message.trim().is_empty())
        .or_else(|| status.canonical_reason().map(str::to_owned))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            error_message(r#"{"error":"Question not found"}"#, StatusCode::NOT_FOUND),
            "Question not found"
        );
        assert_eq!(
            error_message(r#"{"message":"Invalid input"}"#, StatusCode::BAD_REQUEST),
            "Invalid input"
        );
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(
            error_message("<html>oops</html>", StatusCode::BAD_GATEWAY),
            "Bad Gateway"
        );
        assert_eq!(
            error_message(r#"{"error":""}"#, StatusCode::INTERNAL_SERVER_ERROR),
            "Internal Server Error"
        );
        assert_eq!(
            error_message("", StatusCode::from_u16(599).unwrap()),
            "HTTP 599"
        );
    }

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::get("/public/students").anonymous();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.access, Access::Anonymous);
        assert!(request.body.is_none());

        let request = ApiRequest::put("/answers/3/grade")
            .json(&serde_json::json!({"score": 5}))
            .unwrap();
        assert_eq!(request.access, Access::Bearer);
        assert_eq!(request.body.as_deref(), Some(br#"{"score":5}"#.as_slice()));
    }
}
