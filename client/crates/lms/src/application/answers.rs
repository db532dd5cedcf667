//! Answer Service
//!
//! Student submissions and admin grading.

use crate::application::gateway::{ApiGateway, ApiRequest};
use crate::domain::entity::student_answer::{
    GradeRequest, StudentAnswer, StudentAnswerDetails, SubmitAnswerRequest,
};
use crate::domain::transport::HttpTransport;
use crate::domain::value_object::{AnswerId, QuestionId};
use crate::error::ApiResult;

pub struct AnswerService<'a, T> {
    gateway: &'a ApiGateway<T>,
}

impl<'a, T: HttpTransport> AnswerService<'a, T> {
    pub(crate) fn new(gateway: &'a ApiGateway<T>) -> Self {
        Self { gateway }
    }

    /// `GET /answers/my`: answers of the logged-in student
    pub async fn list_mine(&self) -> ApiResult<Vec<StudentAnswer>> {
        self.gateway.fetch_data(ApiRequest::get("/answers/my")).await
    }

    /// `GET /public-answers`, sent without a token
    pub async fn list_mine_public(&self) -> ApiResult<Vec<StudentAnswerDetails>> {
        self.gateway
            .fetch_data(ApiRequest::get("/public-answers").anonymous())
            .await
    }

    /// `GET /answers/my/question/:id`
    pub async fn for_question(&self, question_id: QuestionId) -> ApiResult<StudentAnswer> {
        self.gateway
            .fetch_data(ApiRequest::get(format!("/answers/my/question/{question_id}")))
            .await
    }

    /// `POST /answers/submit`; resubmitting replaces the previous answer
    pub async fn submit(
        &self,
        question_id: QuestionId,
        answer: impl Into<String>,
    ) -> ApiResult<StudentAnswer> {
        let body = SubmitAnswerRequest {
            question_id,
            answer: answer.into(),
        };
        let request = ApiRequest::post("/answers/submit").json(&body)?;
        self.gateway.fetch_data(request).await
    }

    /// `GET /answers` (admin)
    pub async fn list_all(&self) -> ApiResult<Vec<StudentAnswerDetails>> {
        self.gateway.fetch_data(ApiRequest::get("/answers")).await
    }

    /// `GET /public-all-answers`, sent without a token
    pub async fn list_all_public(&self) -> ApiResult<Vec<StudentAnswerDetails>> {
        self.gateway
            .fetch_data(ApiRequest::get("/public-all-answers").anonymous())
            .await
    }

    /// `PUT /answers/:id/grade` (admin)
    pub async fn grade(&self, id: AnswerId, score: i32) -> ApiResult<StudentAnswer> {
        let request = ApiRequest::put(format!("/answers/{id}/grade")).json(&GradeRequest { score })?;
        self.gateway.fetch_data(request).await
    }
}
