//! Zone comparison display models

use serde::{Deserialize, Serialize};

use crate::models::RiskLevel;

/// A metric contributing to a zone's comparison card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonFactor {
    pub metric: String,
    pub value: i32,
}

/// Side-by-side comparison card for one zone
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneComparison {
    pub zone: String,
    pub risk_level: RiskLevel,
    pub confidence: i32,
    pub population: String,
    pub risk_index: i32,
    pub trend: String,
    pub escalation_speed: String,
    pub factors: Vec<ComparisonFactor>,
}

/// Weekly risk-index series per compared zone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonTrend {
    pub week: String,
    pub pnw: i32,
    pub caribbean: i32,
    pub arctic: i32,
}
