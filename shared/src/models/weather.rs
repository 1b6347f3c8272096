//! Normalized weather observation models

use serde::{Deserialize, Serialize};

/// A point-in-time weather observation, normalized from the external source.
///
/// Wind speed stays in the source unit (m/s); conversion to km/h happens at
/// feature-extraction time. Precipitation already folds the rain-or-snow
/// sub-fields together, defaulting to 0 when neither is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSample {
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: f64,
    pub precipitation_mm: f64,
    pub wind_speed_ms: f64,
    pub cloud_cover_pct: f64,
    pub condition: String,
}

/// One entry of a multi-point forecast series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Epoch seconds of the forecast slot
    pub timestamp: i64,
    /// Formatted slot label, `YYYY-MM-DD HH:MM:SS`
    pub label: String,
    pub sample: WeatherSample,
}
