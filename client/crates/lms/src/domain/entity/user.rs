//! User Entity
//!
//! The signed-in user as returned by login/register and `GET /auth/me`,
//! and as persisted under the `user` storage key.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::value_object::{UserId, UserRole};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend user ID (absent in some hand-built records)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: UserRole,
    /// Any further fields the backend sends, kept so the record round-trips
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: Some(id),
            username: Some(username.into()),
            email: None,
            role,
            extra: Map::new(),
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_keeps_unknown_fields() {
        let raw = r#"{"id":3,"username":"rini","email":"rini@example.com","role":"student","class":"10B"}"#;
        let user: User = serde_json::from_str(raw).unwrap();

        assert_eq!(user.id, Some(UserId::new(3)));
        assert_eq!(user.role, UserRole::Student);
        assert_eq!(user.extra.get("class"), Some(&Value::from("10B")));

        let back: Value = serde_json::to_value(&user).unwrap();
        assert_eq!(back, serde_json::from_str::<Value>(raw).unwrap());
    }

    #[test]
    fn test_user_role_only_record() {
        let user: User = serde_json::from_str(r#"{"role":"admin"}"#).unwrap();
        assert!(user.is_admin());
        assert_eq!(user.id, None);
    }

    #[test]
    fn test_user_without_role_is_rejected() {
        assert!(serde_json::from_str::<User>(r#"{"id":1,"username":"budi"}"#).is_err());
    }
}
