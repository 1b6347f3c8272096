//! Report handlers

use axum::{extract::State, Json};
use shared::{Insight, Report};

use crate::error::AppError;
use crate::services::ReportService;
use crate::AppState;

/// Generated report summaries
pub async fn get_reports(State(state): State<AppState>) -> Result<Json<Vec<Report>>, AppError> {
    let service = ReportService::new(state.db.clone());
    Ok(Json(service.reports().await?))
}

/// Machine-generated insights
pub async fn get_insights(State(state): State<AppState>) -> Result<Json<Vec<Insight>>, AppError> {
    let service = ReportService::new(state.db.clone());
    Ok(Json(service.insights().await?))
}
