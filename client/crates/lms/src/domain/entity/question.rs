//! Question Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{QuestionId, QuestionType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub question: String,
    /// Choices, only for multiple-choice questions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Correct answer; the backend hides it from non-staff users
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub score: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Question {
    /// Whether the correct answer was included in the response
    pub fn reveals_answer(&self) -> bool {
        self.answer.as_deref().is_some_and(|a| !a.is_empty())
    }
}

/// Body of `POST /questions` and `PUT /questions/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionInput {
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub question: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub score: i32,
}

impl QuestionInput {
    pub fn multiple_choice(
        question: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        score: i32,
    ) -> Self {
        Self {
            kind: QuestionType::MultipleChoice,
            question: question.into(),
            options,
            answer: Some(answer.into()),
            image_url: None,
            score,
        }
    }

    pub fn essay(question: impl Into<String>, score: i32) -> Self {
        Self {
            kind: QuestionType::Essay,
            question: question.into(),
            options: Vec::new(),
            answer: None,
            image_url: None,
            score,
        }
    }
}
