//! Generated report summaries and AI insights

use serde::{Deserialize, Serialize};

use crate::types::Severity;

/// A generated report available for download
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub date: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub pages: i32,
    pub size: String,
    pub status: String,
    pub highlights: Vec<String>,
}

/// A machine-generated insight surfaced on the reports page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub zone: String,
    pub severity: Severity,
    pub insight: String,
    pub confidence: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_type_serializes_as_type() {
        let report = Report {
            title: "Monthly Risk Assessment Report".to_string(),
            date: "January 2026".to_string(),
            report_type: "Executive Summary".to_string(),
            pages: 24,
            size: "3.2 MB".to_string(),
            status: "Ready".to_string(),
            highlights: vec!["87.3% prediction accuracy".to_string()],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "Executive Summary");
        assert!(json.get("report_type").is_none());
    }
}
