//! Model explainability records

use serde::{Deserialize, Serialize};

/// One ranked feature with its normalized importance and chart color
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureWeight {
    pub feature: String,
    /// Normalized so the most important feature scores 100
    pub importance: i32,
    /// Hex color used by the dashboard chart
    pub color: String,
}

/// Contributing factor within a prediction breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreakdownFactor {
    pub name: String,
    pub value: i32,
}

/// Per-zone breakdown of what drove a prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionBreakdown {
    pub zone: String,
    pub confidence: i32,
    pub factors: Vec<BreakdownFactor>,
}

/// One evaluation metric of the deployed model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetric {
    pub metric: String,
    pub score: f64,
}
