//! Analytics service
//!
//! Pass-through reads over the seeded analytics series, plus a live system
//! status assembled from the zone count, model readiness and a DB ping.

use std::sync::Arc;

use sqlx::PgPool;

use shared::{PredictionAccuracy, RiskTrend, SystemStatus, ZoneActivity};

use crate::error::AppResult;
use crate::external::RiskModel;

/// Analytics service
#[derive(Clone)]
pub struct AnalyticsService {
    db: PgPool,
    model: Arc<dyn RiskModel>,
}

impl AnalyticsService {
    /// Create a new AnalyticsService instance
    pub fn new(db: PgPool, model: Arc<dyn RiskModel>) -> Self {
        Self { db, model }
    }

    /// Monthly risk bucket counts
    pub async fn risk_trend(&self) -> AppResult<Vec<RiskTrend>> {
        let rows = sqlx::query_as::<_, (String, i32, i32, i32)>(
            "SELECT month, high, moderate, safe FROM risk_trends ORDER BY position",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(month, high, moderate, safe)| RiskTrend {
                month,
                high,
                moderate,
                safe,
            })
            .collect())
    }

    /// Weekly prediction accuracy series
    pub async fn prediction_accuracy(&self) -> AppResult<Vec<PredictionAccuracy>> {
        let rows = sqlx::query_as::<_, (String, i32)>(
            "SELECT week, accuracy FROM prediction_accuracy ORDER BY position",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(week, accuracy)| PredictionAccuracy { week, accuracy })
            .collect())
    }

    /// Incident counts per zone
    pub async fn zone_activity(&self) -> AppResult<Vec<ZoneActivity>> {
        let rows = sqlx::query_as::<_, (String, i32)>(
            "SELECT zone, incidents FROM zone_activity ORDER BY position",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(zone, incidents)| ZoneActivity { zone, incidents })
            .collect())
    }

    /// Live system status snapshot
    pub async fn system_status(&self) -> AppResult<SystemStatus> {
        let (monitored_zones, database) =
            match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM risk_zones")
                .fetch_one(&self.db)
                .await
            {
                Ok(count) => (count, "connected".to_string()),
                Err(_) => (0, "disconnected".to_string()),
            };

        let model_ready = self.model.is_ready();
        let status = if database == "connected" {
            "operational"
        } else {
            "degraded"
        };

        Ok(SystemStatus {
            status: status.to_string(),
            monitored_zones,
            model_ready,
            database,
        })
    }
}
