use serde::{Deserialize, Serialize};
use std::fmt;

/// Role carried in the persisted user record
///
/// Roles the client does not know about are kept verbatim in `Other`
/// so the stored record round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
    Other(String),
}

impl UserRole {
    #[inline]
    pub fn code(&self) -> &str {
        use UserRole::*;
        match self {
            Admin => "admin",
            Teacher => "teacher",
            Student => "student",
            Other(code) => code,
        }
    }

    /// Only `admin` passes admin-gated routes; teachers do not.
    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Roles the backend lets manage questions and grade answers
    #[inline]
    pub const fn is_staff(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Teacher)
    }

    #[inline]
    pub fn from_code(code: &str) -> Self {
        use UserRole::*;
        match code {
            "admin" => Admin,
            "teacher" => Teacher,
            "student" => Student,
            other => {
                tracing::debug!(role = other, "Unrecognized user role");
                Other(other.to_string())
            }
        }
    }
}

impl From<String> for UserRole {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_code() {
        assert_eq!(UserRole::from_code("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_code("teacher"), UserRole::Teacher);
        assert_eq!(UserRole::from_code("student"), UserRole::Student);
        assert_eq!(
            UserRole::from_code("Admin"),
            UserRole::Other("Admin".to_string())
        );
    }

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Admin.to_string(), "admin");
        assert_eq!(UserRole::Teacher.to_string(), "teacher");
        assert_eq!(UserRole::Student.to_string(), "student");
        assert_eq!(UserRole::Other("auditor".into()).to_string(), "auditor");
    }

    #[test]
    fn test_user_role_serde_roundtrip() {
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, r#""admin""#);

        let other: UserRole = serde_json::from_str(r#""auditor""#).unwrap();
        assert_eq!(serde_json::to_string(&other).unwrap(), r#""auditor""#);
    }

    #[test]
    fn test_user_role_checks() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Teacher.is_admin());
        assert!(!UserRole::Student.is_admin());
        assert!(UserRole::Teacher.is_staff());
        assert!(!UserRole::Student.is_staff());
        assert!(!UserRole::Other("admin ".into()).is_admin());
    }
}
