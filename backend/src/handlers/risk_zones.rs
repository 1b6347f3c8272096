//! Risk zone CRUD handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use shared::RiskZone;

use crate::error::AppError;
use crate::services::RiskZoneService;
use crate::AppState;

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// List all monitored zones
pub async fn list_risk_zones(
    State(state): State<AppState>,
) -> Result<Json<Vec<RiskZone>>, AppError> {
    let service = RiskZoneService::new(state.db.clone());
    Ok(Json(service.list_zones().await?))
}

/// Get one zone by id
pub async fn get_risk_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
) -> Result<Json<RiskZone>, AppError> {
    let service = RiskZoneService::new(state.db.clone());
    Ok(Json(service.get_zone(&zone_id).await?))
}

/// Create a new zone
pub async fn create_risk_zone(
    State(state): State<AppState>,
    Json(zone): Json<RiskZone>,
) -> Result<(StatusCode, Json<RiskZone>), AppError> {
    let service = RiskZoneService::new(state.db.clone());
    let created = service.create_zone(zone).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a zone by id
pub async fn update_risk_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
    Json(zone): Json<RiskZone>,
) -> Result<Json<RiskZone>, AppError> {
    let service = RiskZoneService::new(state.db.clone());
    Ok(Json(service.update_zone(&zone_id, zone).await?))
}

/// Delete a zone by id
pub async fn delete_risk_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let service = RiskZoneService::new(state.db.clone());
    service.delete_zone(&zone_id).await?;
    Ok(Json(DeleteResponse {
        message: "Risk zone deleted successfully".to_string(),
    }))
}
