//! Server Status Service

use crate::application::gateway::{ApiGateway, ApiRequest};
use crate::domain::entity::server_status::ServerStatus;
use crate::domain::transport::HttpTransport;
use crate::error::ApiResult;

pub struct ServerStatusService<'a, T> {
    gateway: &'a ApiGateway<T>,
}

impl<'a, T: HttpTransport> ServerStatusService<'a, T> {
    pub(crate) fn new(gateway: &'a ApiGateway<T>) -> Self {
        Self { gateway }
    }

    /// `GET /status`; the body is not wrapped in `data`
    pub async fn check(&self) -> ApiResult<ServerStatus> {
        let status: ServerStatus = self.gateway.fetch(ApiRequest::get("/status")).await?;
        tracing::debug!(status = %status.status, "Backend status");
        Ok(status)
    }
}
