//! Historical risk series and notable event records

use serde::{Deserialize, Serialize};

use crate::models::RiskLevel;

/// One month of the historical risk series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoricalData {
    /// Month label, e.g. `Jan 2025`
    pub date: String,
    pub risk: i32,
    pub incidents: i32,
}

/// A notable past event with its prediction outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalEvent {
    pub date: String,
    pub zone: String,
    pub event: String,
    pub risk_level: RiskLevel,
    pub actual_vs_predicted: String,
    pub impact: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_wire_field_names() {
        let event = HistoricalEvent {
            date: "Aug 15, 2025".to_string(),
            zone: "Pacific Northwest".to_string(),
            event: "Major Seismic Event".to_string(),
            risk_level: RiskLevel::High,
            actual_vs_predicted: "Predicted 94% - Occurred".to_string(),
            impact: "Moderate".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["riskLevel"], "high");
        assert_eq!(json["actualVsPredicted"], "Predicted 94% - Occurred");
    }
}
