//! Risk zone CRUD service
//!
//! Plain pass-through reads and writes against the `risk_zones` table. The
//! pipeline is the only writer of the risk fields; this service exists for
//! the dashboard's management surface.

use sqlx::types::Json;
use sqlx::PgPool;

use shared::{validate_zone_id, validate_zone_name, RiskLevel, RiskZone};

use crate::error::{AppError, AppResult};

/// Risk zone service
#[derive(Clone)]
pub struct RiskZoneService {
    db: PgPool,
}

#[derive(sqlx::FromRow)]
struct RiskZoneRow {
    id: String,
    zone: String,
    risk_level: String,
    confidence: i32,
    forecast: String,
    indicators: Json<Vec<String>>,
    population: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    last_update: Option<String>,
}

impl RiskZoneRow {
    fn into_model(self) -> AppResult<RiskZone> {
        let risk_level = RiskLevel::parse(&self.risk_level)
            .ok_or_else(|| AppError::Internal(format!("bad risk level: {}", self.risk_level)))?;

        Ok(RiskZone {
            id: self.id,
            zone: self.zone,
            risk_level,
            confidence: self.confidence,
            forecast: self.forecast,
            indicators: self.indicators.0,
            population: self.population,
            lat: self.lat,
            lng: self.lng,
            last_update: self.last_update,
        })
    }
}

const SELECT_ZONE: &str = r#"
    SELECT id, zone, risk_level, confidence, forecast, indicators,
           population, lat, lng, last_update
    FROM risk_zones
"#;

impl RiskZoneService {
    /// Create a new RiskZoneService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all monitored zones
    pub async fn list_zones(&self) -> AppResult<Vec<RiskZone>> {
        let rows = sqlx::query_as::<_, RiskZoneRow>(&format!("{} ORDER BY id", SELECT_ZONE))
            .fetch_all(&self.db)
            .await?;

        rows.into_iter().map(RiskZoneRow::into_model).collect()
    }

    /// Get one zone by id
    pub async fn get_zone(&self, zone_id: &str) -> AppResult<RiskZone> {
        let row = sqlx::query_as::<_, RiskZoneRow>(&format!("{} WHERE id = $1", SELECT_ZONE))
            .bind(zone_id)
            .fetch_optional(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Risk zone".to_string()))?;

        row.into_model()
    }

    /// Create a new zone
    pub async fn create_zone(&self, zone: RiskZone) -> AppResult<RiskZone> {
        Self::validate(&zone)?;

        let existing =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM risk_zones WHERE id = $1")
                .bind(&zone.id)
                .fetch_one(&self.db)
                .await?;

        if existing > 0 {
            return Err(AppError::DuplicateEntry("zone id".to_string()));
        }

        sqlx::query(
            r#"
            INSERT INTO risk_zones (id, zone, risk_level, confidence, forecast,
                                    indicators, population, lat, lng, last_update)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(&zone.id)
        .bind(&zone.zone)
        .bind(zone.risk_level.as_str())
        .bind(zone.confidence)
        .bind(&zone.forecast)
        .bind(Json(&zone.indicators))
        .bind(&zone.population)
        .bind(zone.lat)
        .bind(zone.lng)
        .bind(&zone.last_update)
        .execute(&self.db)
        .await?;

        Ok(zone)
    }

    /// Replace a zone's fields by id
    pub async fn update_zone(&self, zone_id: &str, zone: RiskZone) -> AppResult<RiskZone> {
        Self::validate(&zone)?;

        let result = sqlx::query(
            r#"
            UPDATE risk_zones
            SET zone = $1, risk_level = $2, confidence = $3, forecast = $4,
                indicators = $5, population = $6, lat = $7, lng = $8, last_update = $9
            WHERE id = $10
            "#,
        )
        .bind(&zone.zone)
        .bind(zone.risk_level.as_str())
        .bind(zone.confidence)
        .bind(&zone.forecast)
        .bind(Json(&zone.indicators))
        .bind(&zone.population)
        .bind(zone.lat)
        .bind(zone.lng)
        .bind(&zone.last_update)
        .bind(zone_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Risk zone".to_string()));
        }

        self.get_zone(zone_id).await
    }

    /// Delete a zone by id
    pub async fn delete_zone(&self, zone_id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM risk_zones WHERE id = $1")
            .bind(zone_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Risk zone".to_string()));
        }

        Ok(())
    }

    fn validate(zone: &RiskZone) -> AppResult<()> {
        validate_zone_id(&zone.id).map_err(|msg| AppError::Validation {
            field: "id".to_string(),
            message: msg.to_string(),
        })?;
        validate_zone_name(&zone.zone).map_err(|msg| AppError::Validation {
            field: "zone".to_string(),
            message: msg.to_string(),
        })?;
        shared::validate_confidence(zone.confidence).map_err(|msg| AppError::Validation {
            field: "confidence".to_string(),
            message: msg.to_string(),
        })?;
        if let Some(lat) = zone.lat {
            shared::validate_latitude(lat).map_err(|msg| AppError::Validation {
                field: "lat".to_string(),
                message: msg.to_string(),
            })?;
        }
        if let Some(lng) = zone.lng {
            shared::validate_longitude(lng).map_err(|msg| AppError::Validation {
                field: "lng".to_string(),
                message: msg.to_string(),
            })?;
        }
        Ok(())
    }
}
