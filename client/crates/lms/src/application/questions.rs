//! Question Service
//!
//! The public listing omits correct answers for non-staff callers; the
//! backend decides that, not this client.

use crate::application::gateway::{ApiGateway, ApiRequest};
use crate::domain::entity::question::{Question, QuestionInput};
use crate::domain::transport::HttpTransport;
use crate::domain::value_object::QuestionId;
use crate::error::ApiResult;

pub struct QuestionService<'a, T> {
    gateway: &'a ApiGateway<T>,
}

impl<'a, T: HttpTransport> QuestionService<'a, T> {
    pub(crate) fn new(gateway: &'a ApiGateway<T>) -> Self {
        Self { gateway }
    }

    /// `GET /public/questions`, sent without a token
    pub async fn list_public(&self) -> ApiResult<Vec<Question>> {
        self.gateway
            .fetch_data(ApiRequest::get("/public/questions").anonymous())
            .await
    }

    pub async fn list(&self) -> ApiResult<Vec<Question>> {
        self.gateway.fetch_data(ApiRequest::get("/questions")).await
    }

    pub async fn get(&self, id: QuestionId) -> ApiResult<Question> {
        self.gateway
            .fetch_data(ApiRequest::get(format!("/questions/{id}")))
            .await
    }

    /// Admin only
    pub async fn create(&self, input: &QuestionInput) -> ApiResult<Question> {
        let request = ApiRequest::post("/questions").json(input)?;
        self.gateway.fetch_data(request).await
    }

    /// Admin only
    pub async fn update(&self, id: QuestionId, input: &QuestionInput) -> ApiResult<Question> {
        let request = ApiRequest::put(format!("/questions/{id}")).json(input)?;
        self.gateway.fetch_data(request).await
    }

    /// Admin only
    pub async fn delete(&self, id: QuestionId) -> ApiResult<()> {
        self.gateway
            .send(ApiRequest::delete(format!("/questions/{id}")))
            .await
    }
}
