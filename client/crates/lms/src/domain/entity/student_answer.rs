//! Student Answer Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{AnswerId, QuestionId, QuestionType, StudentId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAnswer {
    pub id: AnswerId,
    pub student_id: StudentId,
    pub question_id: QuestionId,
    pub answer: String,
    /// `None` until graded (essays) or auto-scored (multiple choice)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl StudentAnswer {
    pub fn is_graded(&self) -> bool {
        self.score.is_some()
    }
}

/// Answer joined with student and question details (listing endpoints)
///
/// Listing endpoints do not all send the same details, so every detail
/// field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAnswerDetails {
    #[serde(flatten)]
    pub answer: StudentAnswer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_score: Option<i32>,
}

/// Body of `POST /answers/submit`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitAnswerRequest {
    pub question_id: QuestionId,
    pub answer: String,
}

/// Body of `PUT /answers/:id/grade`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeRequest {
    pub score: i32,
}
