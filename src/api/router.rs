//! Route table and middleware assembly

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use super::state::AppState;
use super::{analysis, health, tutor};
use crate::config::CorsConfig;

pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/tutor/chat", post(tutor::chat))
        .route("/tutor/chat/stream", post(tutor::chat_stream))
        .route("/tutor/health", get(tutor::health))
        .route("/analysis/school-head", post(analysis::school_head))
        .route("/analysis/teacher", post(analysis::teacher))
        .route("/analysis/county-strategic", post(analysis::county_strategic))
        .route("/analysis/equity", post(analysis::equity))
        .route("/analysis/health", get(analysis::health))
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
        .with_state(state)
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
