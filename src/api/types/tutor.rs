//! Tutoring request/response DTOs

use serde::{Deserialize, Serialize};

use crate::domain::TutoringContext;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub student_context: TutoringContext,
    /// Accepted for wire compatibility; endpoint choice selects streaming.
    #[serde(default)]
    pub stream_response: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    pub timestamp: i64,
}

impl ChatResponse {
    pub fn new(response: String) -> Self {
        Self {
            response,
            session_id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
