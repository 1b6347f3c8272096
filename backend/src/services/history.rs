//! Historical data service
//!
//! Pass-through reads over the seeded historical collections.

use sqlx::PgPool;

use shared::{HistoricalData, HistoricalEvent, RiskLevel};

use crate::error::{AppError, AppResult};

/// Historical data service
#[derive(Clone)]
pub struct HistoryService {
    db: PgPool,
}

#[derive(sqlx::FromRow)]
struct EventRow {
    date: String,
    zone: String,
    event: String,
    risk_level: String,
    actual_vs_predicted: String,
    impact: String,
}

impl HistoryService {
    /// Create a new HistoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Monthly historical risk series
    pub async fn historical_data(&self) -> AppResult<Vec<HistoricalData>> {
        let rows = sqlx::query_as::<_, (String, i32, i32)>(
            "SELECT date, risk, incidents FROM historical_data ORDER BY position",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(date, risk, incidents)| HistoricalData {
                date,
                risk,
                incidents,
            })
            .collect())
    }

    /// Notable past events with prediction outcomes
    pub async fn historical_events(&self) -> AppResult<Vec<HistoricalEvent>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT date, zone, event, risk_level, actual_vs_predicted, impact
            FROM historical_events
            ORDER BY position
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter()
            .map(|row| {
                let risk_level = RiskLevel::parse(&row.risk_level).ok_or_else(|| {
                    AppError::Internal(format!("bad risk level: {}", row.risk_level))
                })?;
                Ok(HistoricalEvent {
                    date: row.date,
                    zone: row.zone,
                    event: row.event,
                    risk_level,
                    actual_vs_predicted: row.actual_vs_predicted,
                    impact: row.impact,
                })
            })
            .collect()
    }
}
