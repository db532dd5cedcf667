//! Student Entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{StudentId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    /// Linked login account, if the student has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub name: String,
    pub class: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /students` and `PUT /students/:id`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentInput {
    pub name: String,
    pub class: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_from_backend_json() {
        let raw = r#"{
            "id": 1,
            "user_id": 4,
            "name": "Budi Santoso",
            "class": "10A",
            "email": "budi@example.com",
            "created_at": "2024-05-01T08:00:00Z",
            "updated_at": "0001-01-01T00:00:00Z"
        }"#;
        let student: Student = serde_json::from_str(raw).unwrap();
        assert_eq!(student.id, StudentId::new(1));
        assert_eq!(student.user_id, Some(UserId::new(4)));
        assert!(student.created_at.is_some());
    }

    #[test]
    fn test_student_minimal_json() {
        let raw = r#"{"id":2,"name":"Ani Wijaya","class":"10A","email":"ani@example.com"}"#;
        let student: Student = serde_json::from_str(raw).unwrap();
        assert_eq!(student.user_id, None);
        assert_eq!(student.created_at, None);
    }
}
