//! Service-level health endpoints

use axum::Json;
use serde_json::{json, Value};

/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "UP",
        "service": "syncsenta-ai-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /live
pub async fn live_check() -> &'static str {
    "OK"
}
