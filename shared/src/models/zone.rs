//! Monitored risk zone models

use serde::{Deserialize, Serialize};

/// Ordinal risk scale used across the platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    /// Map a raw classifier class onto the four-level scale.
    ///
    /// Classifier output is clamped into 0..=3: anything at or above 3 is
    /// critical, anything at or below 0 is safe.
    pub fn from_class(class: i32) -> Self {
        match class {
            i32::MIN..=0 => RiskLevel::Safe,
            1 => RiskLevel::Moderate,
            2 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Parse a stored label back into the enum.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "safe" => Some(RiskLevel::Safe),
            "moderate" => Some(RiskLevel::Moderate),
            "high" => Some(RiskLevel::High),
            "critical" => Some(RiskLevel::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A monitored zone as served to the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskZone {
    pub id: String,
    pub zone: String,
    pub risk_level: RiskLevel,
    pub confidence: i32,
    pub forecast: String,
    pub indicators: Vec<String>,
    pub population: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub last_update: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_class_maps_each_level() {
        assert_eq!(RiskLevel::from_class(0), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_class(1), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_class(2), RiskLevel::High);
        assert_eq!(RiskLevel::from_class(3), RiskLevel::Critical);
    }

    #[test]
    fn test_from_class_clamps_out_of_range() {
        assert_eq!(RiskLevel::from_class(4), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_class(99), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_class(-1), RiskLevel::Safe);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(RiskLevel::High.as_str(), "high");
    }

    #[test]
    fn test_risk_zone_wire_field_names() {
        let zone = RiskZone {
            id: "1".to_string(),
            zone: "Pacific Northwest".to_string(),
            risk_level: RiskLevel::High,
            confidence: 94,
            forecast: "48-72 hours".to_string(),
            indicators: vec!["Seismic Activity".to_string()],
            population: Some("4.1M".to_string()),
            lat: Some(47.6062),
            lng: Some(-122.3321),
            last_update: None,
        };
        let json = serde_json::to_value(&zone).unwrap();
        assert_eq!(json["riskLevel"], "high");
        assert!(json.get("lastUpdate").is_some());
        assert!(json.get("risk_level").is_none());
    }
}
