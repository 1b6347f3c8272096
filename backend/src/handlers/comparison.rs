//! Zone comparison handlers
//!
//! Comparison cards and the six-week trend series are display-only
//! fixtures, served as literals rather than stored state.

use axum::Json;
use shared::{ComparisonFactor, ComparisonTrend, RiskLevel, ZoneComparison};

fn factors(values: [(&str, i32); 5]) -> Vec<ComparisonFactor> {
    values
        .into_iter()
        .map(|(metric, value)| ComparisonFactor {
            metric: metric.to_string(),
            value,
        })
        .collect()
}

/// Side-by-side comparison cards
pub async fn get_zone_comparison() -> Json<Vec<ZoneComparison>> {
    Json(vec![
        ZoneComparison {
            zone: "Pacific Northwest".to_string(),
            risk_level: RiskLevel::High,
            confidence: 94,
            population: "14.2M".to_string(),
            risk_index: 85,
            trend: "+12%".to_string(),
            escalation_speed: "Fast".to_string(),
            factors: factors([
                ("Seismic", 92),
                ("Temperature", 78),
                ("Rainfall", 65),
                ("Wind", 58),
                ("Historical", 88),
            ]),
        },
        ZoneComparison {
            zone: "Caribbean Basin".to_string(),
            risk_level: RiskLevel::High,
            confidence: 91,
            population: "43.7M".to_string(),
            risk_index: 82,
            trend: "+18%".to_string(),
            escalation_speed: "Critical".to_string(),
            factors: factors([
                ("Seismic", 45),
                ("Temperature", 85),
                ("Rainfall", 90),
                ("Wind", 95),
                ("Historical", 82),
            ]),
        },
        ZoneComparison {
            zone: "Arctic Circle".to_string(),
            risk_level: RiskLevel::Moderate,
            confidence: 82,
            population: "4.3M".to_string(),
            risk_index: 62,
            trend: "+8%".to_string(),
            escalation_speed: "Moderate".to_string(),
            factors: factors([
                ("Seismic", 25),
                ("Temperature", 95),
                ("Rainfall", 55),
                ("Wind", 68),
                ("Historical", 72),
            ]),
        },
    ])
}

/// Six-week risk-index trend per compared zone
pub async fn get_comparison_trend() -> Json<Vec<ComparisonTrend>> {
    let weeks = [
        ("W1", 65, 58, 52),
        ("W2", 68, 62, 54),
        ("W3", 72, 68, 56),
        ("W4", 78, 74, 59),
        ("W5", 82, 78, 60),
        ("W6", 85, 82, 62),
    ];

    Json(
        weeks
            .into_iter()
            .map(|(week, pnw, caribbean, arctic)| ComparisonTrend {
                week: week.to_string(),
                pnw,
                caribbean,
                arctic,
            })
            .collect(),
    )
}
