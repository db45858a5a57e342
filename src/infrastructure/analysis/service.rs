//! Education analysis service (school head, teacher, county)

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use crate::domain::analysis::{equity, prompt};
use crate::domain::{AnalysisContext, CompletionGateway, EquityHeatmapEntry};

pub struct EducationAnalysisService {
    gateway: Arc<dyn CompletionGateway>,
}

impl EducationAnalysisService {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self { gateway }
    }

    /// Free-text analysis for a subject area. The reply is returned verbatim;
    /// no structured parsing is attempted.
    pub async fn analyze(&self, request: &AnalysisContext) -> String {
        info!(area = ?request.subject_area, query = %request.query, "Generating analysis");

        self.gateway
            .analysis_completion(
                prompt::system_prompt(request.subject_area),
                &request.query,
                &request.context_data,
            )
            .await
    }

    /// County equity heatmap. Model non-compliance with the requested JSON
    /// schema is an expected failure mode and yields an empty list.
    pub async fn equity_analysis(&self, county: &str) -> Vec<EquityHeatmapEntry> {
        let system_prompt = prompt::equity_system_prompt(county);
        let query = format!("Generate equity analysis heatmap data for {county} County");

        let mut context_data = Map::new();
        context_data.insert("county".to_string(), Value::String(county.to_string()));

        info!(county = %county, "Generating equity analysis");

        let reply = self
            .gateway
            .analysis_completion(&system_prompt, &query, &context_data)
            .await;

        match equity::parse_heatmap(&reply) {
            Some(entries) => entries,
            None => {
                info!(county = %county, "Equity reply did not match the heatmap schema");
                Vec::new()
            }
        }
    }
}
