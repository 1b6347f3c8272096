//! Historical data handlers

use axum::{extract::State, Json};
use shared::{HistoricalData, HistoricalEvent};

use crate::error::AppError;
use crate::services::HistoryService;
use crate::AppState;

/// Monthly historical risk series
pub async fn get_historical_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoricalData>>, AppError> {
    let service = HistoryService::new(state.db.clone());
    Ok(Json(service.historical_data().await?))
}

/// Notable past events
pub async fn get_historical_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoricalEvent>>, AppError> {
    let service = HistoryService::new(state.db.clone());
    Ok(Json(service.historical_events().await?))
}
