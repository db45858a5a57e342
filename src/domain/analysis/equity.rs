//! Tolerant parsing of model output into equity heatmap entries
//!
//! The model is asked for JSON only, but non-compliance is a normal failure
//! mode, not a programming error: replies may wrap the JSON in prose, use a
//! wrong shape, or be garbage. Absence of a valid parse maps to `None`; the
//! adapter turns that into an empty result list.

use serde::Deserialize;

use super::EquityHeatmapEntry;

#[derive(Debug, Deserialize)]
struct HeatmapEnvelope {
    heatmap: Vec<EquityHeatmapEntry>,
}

/// Parse a completion reply into heatmap entries.
///
/// Extracts the outermost `{...}` region (models often wrap JSON in prose or
/// code fences) and then requires a strict parse of the schema, including the
/// documented `avgScore` range.
pub fn parse_heatmap(reply: &str) -> Option<Vec<EquityHeatmapEntry>> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    if end < start {
        return None;
    }

    let envelope: HeatmapEnvelope = serde_json::from_str(&reply[start..=end]).ok()?;

    if envelope
        .heatmap
        .iter()
        .any(|entry| !(0.0..=100.0).contains(&entry.avg_score))
    {
        return None;
    }

    Some(envelope.heatmap)
}
