//! Forecast view handlers
//!
//! Reads fall back to a synchronous pipeline run when a view is empty; the
//! explicit refresh endpoint spawns the run detached instead, so callers
//! observe success only through the resulting store state and logs.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use shared::{DailyOutlook, HourlyOutlook, WeeklyTrend};

use crate::error::AppError;
use crate::services::ForecastService;
use crate::AppState;

#[derive(Serialize)]
pub struct RefreshResponse {
    pub message: String,
}

fn forecast_service(state: &AppState) -> ForecastService {
    ForecastService::new(state.db.clone(), state.weather.clone(), state.model.clone())
}

/// Hourly outlook view
pub async fn get_forecast_24h(
    State(state): State<AppState>,
) -> Result<Json<Vec<HourlyOutlook>>, AppError> {
    Ok(Json(forecast_service(&state).hourly_outlook().await?))
}

/// 3-day breakdown view
pub async fn get_forecast_3day(
    State(state): State<AppState>,
) -> Result<Json<Vec<DailyOutlook>>, AppError> {
    Ok(Json(forecast_service(&state).daily_outlook().await?))
}

/// Weekly trend view
pub async fn get_forecast_7day(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeeklyTrend>>, AppError> {
    Ok(Json(forecast_service(&state).weekly_trend().await?))
}

/// Trigger a detached pipeline run (zone update + aggregation)
pub async fn refresh_forecasts(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<RefreshResponse>), AppError> {
    let service = forecast_service(&state);

    tokio::spawn(async move {
        if let Err(e) = service.update_risk_zones().await {
            tracing::error!("Zone risk update failed: {}", e);
        }
        if let Err(e) = service.update_forecasts().await {
            tracing::error!("Forecast aggregation failed: {}", e);
        }
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(RefreshResponse {
            message: "Forecast refresh started".to_string(),
        }),
    ))
}
