//! Analytics handlers

use axum::{extract::State, Json};
use shared::{PredictionAccuracy, RiskTrend, SystemStatus, ZoneActivity};

use crate::error::AppError;
use crate::services::AnalyticsService;
use crate::AppState;

fn analytics_service(state: &AppState) -> AnalyticsService {
    AnalyticsService::new(state.db.clone(), state.model.clone())
}

/// Monthly risk bucket counts
pub async fn get_risk_trend(
    State(state): State<AppState>,
) -> Result<Json<Vec<RiskTrend>>, AppError> {
    Ok(Json(analytics_service(&state).risk_trend().await?))
}

/// Weekly prediction accuracy series
pub async fn get_prediction_accuracy(
    State(state): State<AppState>,
) -> Result<Json<Vec<PredictionAccuracy>>, AppError> {
    Ok(Json(analytics_service(&state).prediction_accuracy().await?))
}

/// Incident counts per zone
pub async fn get_zone_activity(
    State(state): State<AppState>,
) -> Result<Json<Vec<ZoneActivity>>, AppError> {
    Ok(Json(analytics_service(&state).zone_activity().await?))
}

/// Live system status
pub async fn get_system_status(
    State(state): State<AppState>,
) -> Result<Json<SystemStatus>, AppError> {
    Ok(Json(analytics_service(&state).system_status().await?))
}
