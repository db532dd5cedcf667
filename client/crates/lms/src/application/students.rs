//! Student Service

use crate::application::gateway::{ApiGateway, ApiRequest};
use crate::domain::entity::student::{Student, StudentInput};
use crate::domain::transport::HttpTransport;
use crate::domain::value_object::StudentId;
use crate::error::ApiResult;

pub struct StudentService<'a, T> {
    gateway: &'a ApiGateway<T>,
}

impl<'a, T: HttpTransport> StudentService<'a, T> {
    pub(crate) fn new(gateway: &'a ApiGateway<T>) -> Self {
        Self { gateway }
    }

    /// `GET /public/students`, sent without a token
    pub async fn list_public(&self) -> ApiResult<Vec<Student>> {
        self.gateway
            .fetch_data(ApiRequest::get("/public/students").anonymous())
            .await
    }

    /// `GET /students`
    pub async fn list(&self) -> ApiResult<Vec<Student>> {
        self.gateway.fetch_data(ApiRequest::get("/students")).await
    }

    /// `GET /students/:id`
    pub async fn get(&self, id: StudentId) -> ApiResult<Student> {
        self.gateway
            .fetch_data(ApiRequest::get(format!("/students/{id}")))
            .await
    }

    /// `GET /students/profile/me`: the profile linked to the logged-in user
    pub async fn current_profile(&self) -> ApiResult<Student> {
        self.gateway
            .fetch_data(ApiRequest::get("/students/profile/me"))
            .await
    }

    /// `POST /students`
    pub async fn create(&self, input: &StudentInput) -> ApiResult<Student> {
        let request = ApiRequest::post("/students").json(input)?;
        self.gateway.fetch_data(request).await
    }

    /// `PUT /students/:id`
    pub async fn update(&self, id: StudentId, input: &StudentInput) -> ApiResult<Student> {
        let request = ApiRequest::put(format!("/students/{id}")).json(input)?;
        self.gateway.fetch_data(request).await
    }

    /// `DELETE /students/:id`
    pub async fn delete(&self, id: StudentId) -> ApiResult<()> {
        self.gateway
            .send(ApiRequest::delete(format!("/students/{id}")))
            .await
    }
}
