use serde::{Deserialize, Serialize};

/// Response of `GET /status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
    /// RFC 3339 server time, kept as sent
    #[serde(default)]
    pub time: String,
}

impl ServerStatus {
    pub fn is_online(&self) -> bool {
        self.status.eq_ignore_ascii_case("online")
    }
}
