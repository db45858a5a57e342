//! Student tutoring endpoint handlers

use std::convert::Infallible;

use axum::{
    extract::State,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    Json,
};
use futures::StreamExt;
use tracing::info;

use super::state::AppState;
use super::types::{ApiError, ChatRequest, ChatResponse};

/// POST /tutor/chat
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    validate(&request)?;

    info!(
        grade = request.student_context.grade_level,
        subject = %request.student_context.current_subject,
        "Received chat request"
    );

    let response = state
        .tutor_service
        .tutor_response(&request.message, &request.student_context)
        .await;

    Ok(Json(ChatResponse::new(response)))
}

/// POST /tutor/chat/stream
pub async fn chat_stream(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, ApiError> {
    validate(&request)?;

    info!(
        grade = request.student_context.grade_level,
        subject = %request.student_context.current_subject,
        "Received streaming chat request"
    );

    let fragments = state
        .tutor_service
        .tutor_response_stream(&request.message, &request.student_context)
        .await;

    let events = fragments.map(|fragment| Ok::<_, Infallible>(Event::default().data(fragment)));

    Ok(Sse::new(events)
        .keep_alive(KeepAlive::default())
        .into_response())
}

/// GET /tutor/health
pub async fn health() -> &'static str {
    "Mwalimu AI Tutor is ready! \u{1F393}"
}

fn validate(request: &ChatRequest) -> Result<(), ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::bad_request("message must not be blank").with_param("message"));
    }

    request
        .student_context
        .validate()
        .map_err(|e| ApiError::from(e).with_param("studentContext"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResourceTier, TutoringContext};

    fn request(message: &str, grade: u8) -> ChatRequest {
        ChatRequest {
            message: message.to_string(),
            student_context: TutoringContext {
                grade_level: grade,
                current_subject: "math".to_string(),
                resource_level: ResourceTier::Medium,
                school_id: None,
                teacher_customization: None,
            },
            stream_response: false,
        }
    }

    #[test]
    fn test_validate_accepts_good_request() {
        assert!(validate(&request("hello", 5)).is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_message() {
        assert!(validate(&request("   ", 5)).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_grade() {
        assert!(validate(&request("hello", 0)).is_err());
        assert!(validate(&request("hello", 13)).is_err());
    }
}
