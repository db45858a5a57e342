//! Analysis request/response DTOs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::EquityHeatmapEntry;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub query: String,
    #[serde(default)]
    pub school_id: Option<String>,
    #[serde(default)]
    pub context_data: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub analysis: String,
    pub recommendations: String,
    pub timestamp: i64,
    pub analysis_id: String,
}

impl AnalysisResponse {
    pub fn new(analysis: String, recommendations: impl Into<String>) -> Self {
        Self {
            analysis,
            recommendations: recommendations.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            analysis_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityAnalysisRequest {
    pub county: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityAnalysisResponse {
    pub heatmap: Vec<EquityHeatmapEntry>,
    pub timestamp: i64,
}

impl EquityAnalysisResponse {
    pub fn new(heatmap: Vec<EquityHeatmapEntry>) -> Self {
        Self {
            heatmap,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_request_defaults() {
        let request: AnalysisRequest =
            serde_json::from_str(r#"{"query": "how are we doing?"}"#).unwrap();
        assert!(request.school_id.is_none());
        assert!(request.context_data.is_empty());
    }

    #[test]
    fn test_equity_response_wire_format() {
        let response = EquityAnalysisResponse::new(Vec::new());
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"heatmap\":[]"));
        assert!(json.contains("\"timestamp\""));
    }
}
