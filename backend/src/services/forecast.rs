//! Forecast aggregation pipeline
//!
//! Two batch jobs share this service: the zone risk updater refreshes each
//! monitored zone's current risk state from live conditions, and the
//! forecast aggregator rebuilds the hourly/3-day/weekly views from one
//! fetch-and-classify pass over every zone's forecast series.
//!
//! Failures inside the pipeline are never fatal: an unreachable source or
//! unready classifier skips the affected zone or point and the stores keep
//! their previous contents.

use std::sync::Arc;

use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;

use shared::{
    build_daily_breakdown, build_hourly_outlook, build_weekly_trend, ClassifiedSample,
    DailyOutlook, FeatureVector, HourlyOutlook, RiskLevel, TrendLabel, WeatherSample, WeeklyTrend,
};

use crate::error::AppResult;
use crate::external::{RiskModel, WeatherClient};
use crate::zones::{location_for, ZONE_REGISTRY};

/// Forecast pipeline service
#[derive(Clone)]
pub struct ForecastService {
    db: PgPool,
    weather: WeatherClient,
    model: Arc<dyn RiskModel>,
}

#[derive(sqlx::FromRow)]
struct ZoneRow {
    id: String,
    zone: String,
}

impl ForecastService {
    /// Create a new ForecastService instance
    pub fn new(db: PgPool, weather: WeatherClient, model: Arc<dyn RiskModel>) -> Self {
        Self { db, weather, model }
    }

    /// Refresh every monitored zone's risk state from current conditions.
    ///
    /// Zones without a location mapping, without usable weather data, or
    /// whose classification fails are skipped; the rest are updated
    /// independently (per-zone last write wins).
    pub async fn update_risk_zones(&self) -> AppResult<()> {
        let zones = sqlx::query_as::<_, ZoneRow>("SELECT id, zone FROM risk_zones")
            .fetch_all(&self.db)
            .await?;

        for zone in zones {
            let Some(location) = location_for(&zone.zone) else {
                continue;
            };

            let sample = match self.weather.current(location.city).await {
                Ok(sample) => sample,
                Err(e) => {
                    tracing::warn!("Skipping zone {}: {}", zone.zone, e);
                    continue;
                }
            };

            let features = FeatureVector::from_sample(&sample);
            let classification = match self.model.classify(&features).await {
                Ok(c) => c,
                Err(e) => {
                    tracing::error!("Error updating zone {}: {}", zone.zone, e);
                    continue;
                }
            };

            let risk_level = RiskLevel::from_class(classification.risk_class);
            let indicators = real_time_indicators(&sample);
            let last_update = Utc::now().format("%I:%M %p").to_string();

            sqlx::query(
                r#"
                UPDATE risk_zones
                SET risk_level = $1, confidence = $2, indicators = $3,
                    population = $4, lat = $5, lng = $6, last_update = $7
                WHERE id = $8
                "#,
            )
            .bind(risk_level.as_str())
            .bind((classification.confidence * 100.0) as i32)
            .bind(Json(&indicators))
            .bind(location.population)
            .bind(location.lat)
            .bind(location.lng)
            .bind(&last_update)
            .bind(&zone.id)
            .execute(&self.db)
            .await?;

            tracing::info!(
                "Zone {} updated to {} ({}% confidence)",
                zone.zone,
                risk_level,
                (classification.confidence * 100.0) as i32
            );
        }

        Ok(())
    }

    /// Rebuild the three aggregate views from one classification pass over
    /// every zone's forecast series.
    ///
    /// An empty batch aborts the run without touching the stores, so the
    /// previous aggregates stay authoritative.
    pub async fn update_forecasts(&self) -> AppResult<()> {
        let batch = self.classify_all_forecasts().await;

        if batch.is_empty() {
            tracing::warn!("No forecast samples classified; keeping previous aggregates");
            return Ok(());
        }

        let today = Utc::now().date_naive();
        let hourly = build_hourly_outlook(&batch);
        let daily = build_daily_breakdown(&batch, today);
        let weekly = build_weekly_trend(&batch);

        self.replace_hourly(&hourly).await?;
        self.replace_daily(&daily).await?;
        self.replace_weekly(&weekly).await?;

        tracing::info!("Forecast views rebuilt from {} classified samples", batch.len());
        Ok(())
    }

    /// Fetch and classify every zone's forecast series into one batch.
    /// Unreachable zones and failed points are logged and dropped.
    async fn classify_all_forecasts(&self) -> Vec<ClassifiedSample> {
        let mut batch = Vec::new();

        for location in ZONE_REGISTRY {
            let series = match self.weather.forecast(location.city).await {
                Ok(series) => series,
                Err(e) => {
                    tracing::warn!("Error fetching forecast for {}: {}", location.city, e);
                    continue;
                }
            };

            for point in series {
                let features = FeatureVector::from_sample(&point.sample);
                match self.model.classify(&features).await {
                    Ok(classification) => batch.push(ClassifiedSample::new(
                        location.zone,
                        point.timestamp,
                        &point.label,
                        classification,
                    )),
                    Err(e) => {
                        tracing::error!("Prediction error for {}: {}", location.zone, e);
                    }
                }
            }
        }

        batch
    }

    /// Read the hourly view, running the aggregator first when it is empty.
    pub async fn hourly_outlook(&self) -> AppResult<Vec<HourlyOutlook>> {
        let rows = self.fetch_hourly().await?;
        if rows.is_empty() {
            self.update_forecasts().await?;
            return self.fetch_hourly().await;
        }
        Ok(rows)
    }

    /// Read the 3-day view, running the aggregator first when it is empty.
    pub async fn daily_outlook(&self) -> AppResult<Vec<DailyOutlook>> {
        let rows = self.fetch_daily().await?;
        if rows.is_empty() {
            self.update_forecasts().await?;
            return self.fetch_daily().await;
        }
        Ok(rows)
    }

    /// Read the weekly view, running the aggregator first when it is empty.
    pub async fn weekly_trend(&self) -> AppResult<Vec<WeeklyTrend>> {
        let rows = self.fetch_weekly().await?;
        if rows.is_empty() {
            self.update_forecasts().await?;
            return self.fetch_weekly().await;
        }
        Ok(rows)
    }

    async fn fetch_hourly(&self) -> AppResult<Vec<HourlyOutlook>> {
        let rows = sqlx::query_as::<_, (String, i32, i32)>(
            "SELECT hour, risk, confidence FROM hourly_outlook ORDER BY position",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(hour, risk, confidence)| HourlyOutlook {
                hour,
                risk,
                confidence,
            })
            .collect())
    }

    async fn fetch_daily(&self) -> AppResult<Vec<DailyOutlook>> {
        let rows = sqlx::query_as::<_, (String, i64, i64, i64)>(
            "SELECT day, safe, moderate, high FROM daily_outlook ORDER BY position",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(day, safe, moderate, high)| DailyOutlook {
                day,
                safe,
                moderate,
                high,
            })
            .collect())
    }

    async fn fetch_weekly(&self) -> AppResult<Vec<WeeklyTrend>> {
        let rows = sqlx::query_as::<_, (String, i32, String)>(
            "SELECT day, risk_index, trend FROM weekly_trend ORDER BY position",
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter()
            .map(|(day, risk_index, trend)| {
                let trend = TrendLabel::parse(&trend).ok_or_else(|| {
                    crate::error::AppError::Internal(format!("bad trend label: {}", trend))
                })?;
                Ok(WeeklyTrend {
                    day,
                    risk_index,
                    trend,
                })
            })
            .collect()
    }

    /// Replace the hourly view wholesale, serialized in one transaction.
    async fn replace_hourly(&self, view: &[HourlyOutlook]) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM hourly_outlook")
            .execute(&mut *tx)
            .await?;

        for (position, entry) in view.iter().enumerate() {
            sqlx::query(
                "INSERT INTO hourly_outlook (position, hour, risk, confidence) VALUES ($1, $2, $3, $4)",
            )
            .bind(position as i32)
            .bind(&entry.hour)
            .bind(entry.risk)
            .bind(entry.confidence)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Replace the 3-day view wholesale, serialized in one transaction.
    async fn replace_daily(&self, view: &[DailyOutlook]) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM daily_outlook")
            .execute(&mut *tx)
            .await?;

        for (position, entry) in view.iter().enumerate() {
            sqlx::query(
                "INSERT INTO daily_outlook (position, day, safe, moderate, high) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(position as i32)
            .bind(&entry.day)
            .bind(entry.safe)
            .bind(entry.moderate)
            .bind(entry.high)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Replace the weekly view wholesale, serialized in one transaction.
    async fn replace_weekly(&self, view: &[WeeklyTrend]) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM weekly_trend")
            .execute(&mut *tx)
            .await?;

        for (position, entry) in view.iter().enumerate() {
            sqlx::query(
                "INSERT INTO weekly_trend (position, day, risk_index, trend) VALUES ($1, $2, $3, $4)",
            )
            .bind(position as i32)
            .bind(&entry.day)
            .bind(entry.risk_index)
            .bind(entry.trend.as_str())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

/// Derive qualitative indicator strings from a current-conditions sample.
/// Defaults to a single "Normal Conditions" entry when nothing triggers.
pub fn real_time_indicators(sample: &WeatherSample) -> Vec<String> {
    let mut indicators = Vec::new();

    if sample.wind_speed_ms > 10.0 {
        indicators.push("High Wind Speed".to_string());
    }
    if sample.condition == "Rain" {
        indicators.push("Heavy Rainfall".to_string());
    }

    if indicators.is_empty() {
        indicators.push("Normal Conditions".to_string());
    }
    indicators
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(wind_ms: f64, condition: &str) -> WeatherSample {
        WeatherSample {
            temperature_c: 15.0,
            feels_like_c: 14.0,
            humidity_pct: 60.0,
            precipitation_mm: 0.0,
            wind_speed_ms: wind_ms,
            cloud_cover_pct: 30.0,
            condition: condition.to_string(),
        }
    }

    #[test]
    fn test_calm_conditions_default_indicator() {
        assert_eq!(
            real_time_indicators(&sample(3.0, "Clear")),
            vec!["Normal Conditions"]
        );
    }

    #[test]
    fn test_high_wind_indicator() {
        assert_eq!(
            real_time_indicators(&sample(12.0, "Clear")),
            vec!["High Wind Speed"]
        );
    }

    #[test]
    fn test_rain_and_wind_stack() {
        assert_eq!(
            real_time_indicators(&sample(11.0, "Rain")),
            vec!["High Wind Speed", "Heavy Rainfall"]
        );
    }
}
