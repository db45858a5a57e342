//! Education analysis domain types

pub mod equity;
pub mod prompt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Audience of an analysis query; selects the system prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubjectArea {
    SchoolHead,
    Teacher,
    CountyEquity,
    CountyStrategic,
}

/// A free-text analysis request: the caller's question plus whatever
/// structured data they want the model to reason over.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    pub query: String,
    pub context_data: Map<String, Value>,
    pub subject_area: SubjectArea,
}

impl AnalysisContext {
    pub fn new(
        query: impl Into<String>,
        context_data: Map<String, Value>,
        subject_area: SubjectArea,
    ) -> Self {
        Self {
            query: query.into(),
            context_data,
            subject_area,
        }
    }
}

/// One ward's worth of equity heatmap data
///
/// Produced only by the equity analysis path. Wire names and enum casing
/// follow the frontend heatmap contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityHeatmapEntry {
    pub ward: String,
    pub resource_level: ResourceLevel,
    pub avg_score: f64,
    pub correlation: Correlation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Correlation {
    Strong,
    Moderate,
    Weak,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_area_wire_names() {
        assert_eq!(
            serde_json::to_string(&SubjectArea::SchoolHead).unwrap(),
            "\"SCHOOL_HEAD\""
        );
        assert_eq!(
            serde_json::to_string(&SubjectArea::CountyEquity).unwrap(),
            "\"COUNTY_EQUITY\""
        );
    }

    #[test]
    fn test_heatmap_entry_wire_format() {
        let entry = EquityHeatmapEntry {
            ward: "Central Ward".to_string(),
            resource_level: ResourceLevel::High,
            avg_score: 85.5,
            correlation: Correlation::Strong,
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"resourceLevel\":\"high\""));
        assert!(json.contains("\"avgScore\":85.5"));
        assert!(json.contains("\"correlation\":\"strong\""));
    }
}
