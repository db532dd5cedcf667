use serde::Deserialize;

/// `{ "data": ..., "message": ... }` wrapper used by most backend responses
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}
