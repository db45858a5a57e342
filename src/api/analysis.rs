//! Education analysis endpoint handlers

use axum::{extract::State, Json};
use tracing::info;

use super::state::AppState;
use super::types::{
    AnalysisRequest, AnalysisResponse, ApiError, EquityAnalysisRequest, EquityAnalysisResponse,
};
use crate::domain::{AnalysisContext, SubjectArea};

/// POST /analysis/school-head
pub async fn school_head(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    info!(school_id = ?request.school_id, "Received school head analysis request");

    let analysis = run_analysis(&state, request, SubjectArea::SchoolHead).await;
    Ok(Json(AnalysisResponse::new(
        analysis,
        "See analysis above for actionable recommendations",
    )))
}

/// POST /analysis/teacher
pub async fn teacher(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    info!("Received teacher analysis request");

    let analysis = run_analysis(&state, request, SubjectArea::Teacher).await;
    Ok(Json(AnalysisResponse::new(
        analysis,
        "Review the insights above for classroom improvement strategies",
    )))
}

/// POST /analysis/county-strategic
pub async fn county_strategic(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    info!("Received county strategic analysis request");

    let analysis = run_analysis(&state, request, SubjectArea::CountyStrategic).await;
    Ok(Json(AnalysisResponse::new(
        analysis,
        "Strategic recommendations are included in the analysis above",
    )))
}

/// POST /analysis/equity
pub async fn equity(
    State(state): State<AppState>,
    Json(request): Json<EquityAnalysisRequest>,
) -> Result<Json<EquityAnalysisResponse>, ApiError> {
    if request.county.trim().is_empty() {
        return Err(ApiError::bad_request("county must not be blank").with_param("county"));
    }

    info!(county = %request.county, "Received equity analysis request");

    let heatmap = state.analysis_service.equity_analysis(&request.county).await;
    Ok(Json(EquityAnalysisResponse::new(heatmap)))
}

/// GET /analysis/health
pub async fn health() -> &'static str {
    "Education Analysis Service is operational! \u{1F4CA}"
}

async fn run_analysis(state: &AppState, request: AnalysisRequest, area: SubjectArea) -> String {
    let context = AnalysisContext::new(request.query, request.context_data, area);
    state.analysis_service.analyze(&context).await
}
