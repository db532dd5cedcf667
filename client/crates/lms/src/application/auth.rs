//! Auth Service
//!
//! Login and register persist the returned session; the remaining
//! operations read the local session without touching the network.

use crate::application::gateway::{ApiGateway, ApiRequest};
use crate::domain::entity::auth::{LoginRequest, LoginResponse, RegisterRequest};
use crate::domain::entity::user::User;
use crate::domain::transport::HttpTransport;
use crate::error::{ApiError, ApiResult};

pub struct AuthService<'a, T> {
    gateway: &'a ApiGateway<T>,
}

impl<'a, T: HttpTransport> AuthService<'a, T> {
    pub(crate) fn new(gateway: &'a ApiGateway<T>) -> Self {
        Self { gateway }
    }

    /// `POST /auth/login`, then persist token and user
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        let request = ApiRequest::post("/auth/login").anonymous().json(credentials)?;
        let response: LoginResponse = self.gateway.fetch(request).await?;
        self.persist(&response)?;
        Ok(response)
    }

    /// `POST /auth/register`, then persist token and user
    pub async fn register(&self, input: &RegisterRequest) -> ApiResult<LoginResponse> {
        let request = ApiRequest::post("/auth/register").anonymous().json(input)?;
        let response: LoginResponse = self.gateway.fetch(request).await?;
        self.persist(&response)?;
        Ok(response)
    }

    /// `GET /auth/me`
    pub async fn current_user(&self) -> ApiResult<User> {
        self.gateway.fetch_data(ApiRequest::get("/auth/me")).await
    }

    /// Forget the local session
    pub fn logout(&self) -> ApiResult<()> {
        self.gateway.session().clear_session()?;
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.gateway.session().is_logged_in()
    }

    /// Locally stored user, if any
    pub fn user(&self) -> Option<User> {
        self.gateway.session().get_user()
    }

    fn persist(&self, response: &LoginResponse) -> ApiResult<()> {
        self.gateway
            .session()
            .set_session(&response.token, &response.user)
            .map_err(|e| {
                let err = ApiError::Session(e);
                err.log();
                err
            })
    }
}
