//! Risk classifier adapter
//!
//! The classifier is a black-box collaborator behind the [`RiskModel`]
//! trait: the production implementation is an HTTP adapter over a model
//! serving endpoint, and tests substitute a pure-function stub.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{Classification, FeatureVector, FeatureWeight, FEATURE_NAMES};

use crate::config::InferenceConfig;
use crate::error::{AppError, AppResult};

/// Chart palette cycled over ranked features
const IMPORTANCE_PALETTE: [&str; 7] = [
    "#ff3366", "#ffb800", "#00d4ff", "#4d88ff", "#00ff87", "#9b51e0", "#f2994a",
];

/// The risk classification model as consumed by the pipeline.
#[async_trait]
pub trait RiskModel: Send + Sync {
    /// Classify one feature vector into a risk class with confidence.
    ///
    /// Fails with [`AppError::ModelNotLoaded`] when no model is configured;
    /// the pipeline catches that per unit of work.
    async fn classify(&self, features: &FeatureVector) -> AppResult<Classification>;

    /// Ranked feature importances, normalized so the maximum is 100.
    async fn feature_importance(&self) -> AppResult<Vec<FeatureWeight>>;

    /// Whether classification calls can currently succeed.
    fn is_ready(&self) -> bool;
}

/// HTTP adapter over the model serving endpoint
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    endpoint: Option<String>,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    features: [f64; 7],
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    risk_class: i32,
    confidence: f64,
}

#[derive(Debug, Deserialize)]
struct ImportanceResponse {
    importances: Vec<f64>,
}

impl InferenceClient {
    /// Build the client from configuration. An empty endpoint leaves the
    /// model unready; `classify` then fails until one is configured.
    pub fn from_config(config: &InferenceConfig) -> Self {
        let endpoint = if config.endpoint.is_empty() {
            None
        } else {
            Some(config.endpoint.clone())
        };

        Self {
            client: Client::new(),
            endpoint,
            api_key: config.api_key.clone(),
        }
    }

    fn endpoint(&self) -> AppResult<&str> {
        self.endpoint.as_deref().ok_or(AppError::ModelNotLoaded)
    }
}

#[async_trait]
impl RiskModel for InferenceClient {
    async fn classify(&self, features: &FeatureVector) -> AppResult<Classification> {
        let endpoint = self.endpoint()?;
        let request = PredictRequest {
            features: features.values(),
        };

        let response = self
            .client
            .post(format!("{}/predict", endpoint))
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Inference(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Inference(format!("{} - {}", status, body)));
        }

        let result: PredictResponse = response
            .json()
            .await
            .map_err(|e| AppError::Inference(format!("malformed response: {}", e)))?;

        Ok(Classification {
            risk_class: result.risk_class,
            confidence: result.confidence,
        })
    }

    async fn feature_importance(&self) -> AppResult<Vec<FeatureWeight>> {
        let endpoint = self.endpoint()?;

        let response = self
            .client
            .get(format!("{}/importance", endpoint))
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| AppError::Inference(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Inference(format!("{} - {}", status, body)));
        }

        let result: ImportanceResponse = response
            .json()
            .await
            .map_err(|e| AppError::Inference(format!("malformed response: {}", e)))?;

        Ok(rank_importances(&result.importances))
    }

    fn is_ready(&self) -> bool {
        self.endpoint.is_some()
    }
}

/// Pair raw importances with feature names and palette colors, normalize so
/// the maximum scores 100, and sort descending.
pub fn rank_importances(raw: &[f64]) -> Vec<FeatureWeight> {
    let max = raw.iter().cloned().fold(f64::MIN, f64::max);
    if raw.is_empty() || max <= 0.0 {
        return Vec::new();
    }

    let mut ranked: Vec<FeatureWeight> = raw
        .iter()
        .zip(FEATURE_NAMES.iter())
        .enumerate()
        .map(|(i, (imp, name))| FeatureWeight {
            feature: name.to_string(),
            importance: ((imp / max) * 100.0) as i32,
            color: IMPORTANCE_PALETTE[i % IMPORTANCE_PALETTE.len()].to_string(),
        })
        .collect();

    ranked.sort_by(|a, b| b.importance.cmp(&a.importance));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pure-function stand-in for the serving endpoint: class grows with
    /// wind, full confidence.
    struct StubModel;

    #[async_trait]
    impl RiskModel for StubModel {
        async fn classify(&self, features: &FeatureVector) -> AppResult<Classification> {
            Ok(Classification {
                risk_class: (features.wind_kph / 20.0) as i32,
                confidence: 1.0,
            })
        }

        async fn feature_importance(&self) -> AppResult<Vec<FeatureWeight>> {
            Ok(rank_importances(&[1.0, 0.5, 0.25]))
        }

        fn is_ready(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_stub_model_behind_trait_object() {
        let model: std::sync::Arc<dyn RiskModel> = std::sync::Arc::new(StubModel);
        assert!(model.is_ready());

        let mut features = FeatureVector {
            temperature_celsius: 20.0,
            feels_like_celsius: 19.0,
            humidity: 50.0,
            precip_mm: 0.0,
            wind_kph: 10.0,
            cloud: 20.0,
            risk_cluster: 0.0,
        };
        let calm = model.classify(&features).await.unwrap();
        assert_eq!(calm.risk_class, 0);

        features.wind_kph = 70.0;
        let stormy = model.classify(&features).await.unwrap();
        assert_eq!(stormy.risk_class, 3);
    }

    #[test]
    fn test_rank_importances_normalizes_max_to_100() {
        let ranked = rank_importances(&[0.1, 0.4, 0.2, 0.05, 0.3, 0.15]);
        assert_eq!(ranked[0].importance, 100);
        assert_eq!(ranked[0].feature, "Feels Like");
        assert!(ranked.windows(2).all(|w| w[0].importance >= w[1].importance));
    }

    #[test]
    fn test_rank_importances_assigns_palette_by_input_order() {
        let ranked = rank_importances(&[1.0, 0.5]);
        // Temperature came first in the input, so it keeps the first color
        let temp = ranked.iter().find(|w| w.feature == "Temperature").unwrap();
        assert_eq!(temp.color, "#ff3366");
        let feels = ranked.iter().find(|w| w.feature == "Feels Like").unwrap();
        assert_eq!(feels.color, "#ffb800");
    }

    #[test]
    fn test_rank_importances_empty_input() {
        assert!(rank_importances(&[]).is_empty());
    }

    #[test]
    fn test_unconfigured_client_is_not_ready() {
        let client = InferenceClient::from_config(&InferenceConfig {
            endpoint: String::new(),
            api_key: String::new(),
        });
        assert!(!client.is_ready());
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_classification() {
        let client = InferenceClient::from_config(&InferenceConfig {
            endpoint: String::new(),
            api_key: String::new(),
        });
        let features = FeatureVector {
            temperature_celsius: 20.0,
            feels_like_celsius: 19.0,
            humidity: 50.0,
            precip_mm: 0.0,
            wind_kph: 10.0,
            cloud: 20.0,
            risk_cluster: 0.0,
        };
        let result = client.classify(&features).await;
        assert!(matches!(result, Err(AppError::ModelNotLoaded)));
    }
}
