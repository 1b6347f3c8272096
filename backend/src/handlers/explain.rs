//! Explainability handlers

use axum::{extract::State, Json};
use shared::{FeatureWeight, ModelMetric, PredictionBreakdown};

use crate::error::AppError;
use crate::services::ExplainService;
use crate::AppState;

fn explain_service(state: &AppState) -> ExplainService {
    ExplainService::new(state.db.clone(), state.model.clone())
}

/// Ranked feature importances
pub async fn get_feature_importance(
    State(state): State<AppState>,
) -> Result<Json<Vec<FeatureWeight>>, AppError> {
    Ok(Json(explain_service(&state).feature_importance().await?))
}

/// Per-zone prediction breakdowns
pub async fn get_prediction_breakdown(
    State(state): State<AppState>,
) -> Result<Json<Vec<PredictionBreakdown>>, AppError> {
    Ok(Json(explain_service(&state).prediction_breakdowns().await?))
}

/// Model evaluation metrics
pub async fn get_model_metrics(
    State(state): State<AppState>,
) -> Result<Json<Vec<ModelMetric>>, AppError> {
    Ok(Json(explain_service(&state).model_metrics().await?))
}
