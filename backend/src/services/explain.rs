//! Explainability service
//!
//! Serves ranked feature importances live from the classifier when it is
//! ready, falling back to the seeded ranking otherwise; the remaining
//! explainability collections are pass-through reads.

use std::sync::Arc;

use sqlx::types::Json;
use sqlx::PgPool;

use shared::{BreakdownFactor, FeatureWeight, ModelMetric, PredictionBreakdown};

use crate::error::AppResult;
use crate::external::RiskModel;

/// Explainability service
#[derive(Clone)]
pub struct ExplainService {
    db: PgPool,
    model: Arc<dyn RiskModel>,
}

#[derive(sqlx::FromRow)]
struct BreakdownRow {
    zone: String,
    confidence: i32,
    factors: Json<Vec<BreakdownFactor>>,
}

impl ExplainService {
    /// Create a new ExplainService instance
    pub fn new(db: PgPool, model: Arc<dyn RiskModel>) -> Self {
        Self { db, model }
    }

    /// Ranked feature importances, live when the model is ready
    pub async fn feature_importance(&self) -> AppResult<Vec<FeatureWeight>> {
        match self.model.feature_importance().await {
            Ok(ranked) if !ranked.is_empty() => return Ok(ranked),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Falling back to stored feature importance: {}", e);
            }
        }

        self.stored_importance().await
    }

    async fn stored_importance(&self) -> AppResult<Vec<FeatureWeight>> {
        let rows = sqlx::query_as::<_, (String, i32, String)>(
            "SELECT feature, importance, color FROM feature_importance ORDER BY position",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(feature, importance, color)| FeatureWeight {
                feature,
                importance,
                color,
            })
            .collect())
    }

    /// Per-zone prediction breakdowns
    pub async fn prediction_breakdowns(&self) -> AppResult<Vec<PredictionBreakdown>> {
        let rows = sqlx::query_as::<_, BreakdownRow>(
            "SELECT zone, confidence, factors FROM prediction_breakdowns ORDER BY position",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| PredictionBreakdown {
                zone: row.zone,
                confidence: row.confidence,
                factors: row.factors.0,
            })
            .collect())
    }

    /// Model evaluation metrics
    pub async fn model_metrics(&self) -> AppResult<Vec<ModelMetric>> {
        let rows = sqlx::query_as::<_, (String, f64)>(
            "SELECT metric, score FROM model_metrics ORDER BY position",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(metric, score)| ModelMetric { metric, score })
            .collect())
    }
}
