//! Analytics series served to the dashboard charts

use serde::{Deserialize, Serialize};

/// Monthly counts of zones per risk bucket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiskTrend {
    pub month: String,
    pub high: i32,
    pub moderate: i32,
    pub safe: i32,
}

/// Weekly prediction accuracy figure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictionAccuracy {
    pub week: String,
    pub accuracy: i32,
}

/// Incident count per zone
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZoneActivity {
    pub zone: String,
    pub incidents: i32,
}

/// Live system status snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub status: String,
    pub monitored_zones: i64,
    pub model_ready: bool,
    pub database: String,
}
