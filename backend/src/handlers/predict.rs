//! Direct classification handler
//!
//! Validated pass-through from a 7-field feature payload to the classifier.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::{FeatureVector, RiskLevel};
use validator::Validate;

use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(range(min = -90.0, max = 60.0))]
    pub temperature_celsius: f64,
    #[validate(range(min = -90.0, max = 70.0))]
    pub feels_like_celsius: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f64,
    #[validate(range(min = 0.0))]
    pub precip_mm: f64,
    #[validate(range(min = 0.0))]
    pub wind_kph: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub cloud: f64,
    pub risk_cluster: f64,
}

#[derive(Serialize)]
pub struct PredictResponse {
    pub risk_level: RiskLevel,
    pub confidence: f64,
}

/// Classify one feature vector
pub async fn predict_risk(
    State(state): State<AppState>,
    Json(body): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    body.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let features = FeatureVector {
        temperature_celsius: body.temperature_celsius,
        feels_like_celsius: body.feels_like_celsius,
        humidity: body.humidity,
        precip_mm: body.precip_mm,
        wind_kph: body.wind_kph,
        cloud: body.cloud,
        risk_cluster: body.risk_cluster,
    };

    let classification = state.model.classify(&features).await?;

    Ok(Json(PredictResponse {
        risk_level: RiskLevel::from_class(classification.risk_class),
        confidence: classification.confidence,
    }))
}
