//! Weather API client for fetching conditions per monitored city
//!
//! Integrates with the OpenWeatherMap API for current conditions and the
//! 5-day/3-hour forecast series the aggregation pipeline consumes.

use reqwest::Client;
use serde::Deserialize;
use shared::{ForecastPoint, WeatherSample};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap response for current weather
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    weather: Vec<OwmWeather>,
    main: OwmMain,
    wind: OwmWind,
    clouds: OwmClouds,
    rain: Option<OwmPrecip>,
    snow: Option<OwmPrecip>,
}

#[derive(Debug, Deserialize)]
struct OwmWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmClouds {
    all: f64,
}

/// Rain/snow accumulation block; current weather reports `1h`, the forecast
/// series reports `3h`
#[derive(Debug, Deserialize)]
struct OwmPrecip {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

/// OpenWeatherMap response for the 5-day/3-hour forecast
#[derive(Debug, Deserialize)]
struct OwmForecastResponse {
    list: Vec<OwmForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OwmForecastItem {
    dt: i64,
    dt_txt: Option<String>,
    main: OwmMain,
    weather: Vec<OwmWeather>,
    clouds: OwmClouds,
    wind: OwmWind,
    rain: Option<OwmPrecip>,
    snow: Option<OwmPrecip>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: api_endpoint,
        }
    }

    /// Fetch current conditions for a city
    pub async fn current(&self, city: &str) -> AppResult<WeatherSample> {
        if self.api_key.is_empty() {
            return Err(AppError::Configuration(
                "Weather API key not configured".to_string(),
            ));
        }

        let url = format!(
            "{}/weather?q={}&appid={}&units=metric",
            self.base_url, city, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::WeatherSource(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherSource(format!("{} - {}", status, body)));
        }

        let data: OwmCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::WeatherSource(format!("malformed payload: {}", e)))?;

        Ok(convert_current(data))
    }

    /// Fetch the 5-day/3-hour forecast series for a city.
    ///
    /// Points without a formatted slot label are dropped; the aggregation
    /// pipeline cannot bucket them.
    pub async fn forecast(&self, city: &str) -> AppResult<Vec<ForecastPoint>> {
        if self.api_key.is_empty() {
            return Err(AppError::Configuration(
                "Weather API key not configured".to_string(),
            ));
        }

        let url = format!(
            "{}/forecast?q={}&appid={}&units=metric",
            self.base_url, city, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::WeatherSource(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherSource(format!("{} - {}", status, body)));
        }

        let data: OwmForecastResponse = response
            .json()
            .await
            .map_err(|e| AppError::WeatherSource(format!("malformed payload: {}", e)))?;

        Ok(convert_forecast(data))
    }
}

fn convert_current(data: OwmCurrentResponse) -> WeatherSample {
    WeatherSample {
        temperature_c: data.main.temp,
        feels_like_c: data.main.feels_like,
        humidity_pct: data.main.humidity,
        precipitation_mm: precipitation(data.rain.as_ref(), data.snow.as_ref(), false),
        wind_speed_ms: data.wind.speed,
        cloud_cover_pct: data.clouds.all,
        condition: data
            .weather
            .first()
            .map(|w| w.main.clone())
            .unwrap_or_default(),
    }
}

fn convert_forecast(data: OwmForecastResponse) -> Vec<ForecastPoint> {
    data.list
        .into_iter()
        .filter_map(|item| {
            let label = item.dt_txt?;
            Some(ForecastPoint {
                timestamp: item.dt,
                label,
                sample: WeatherSample {
                    temperature_c: item.main.temp,
                    feels_like_c: item.main.feels_like,
                    humidity_pct: item.main.humidity,
                    precipitation_mm: precipitation(
                        item.rain.as_ref(),
                        item.snow.as_ref(),
                        true,
                    ),
                    wind_speed_ms: item.wind.speed,
                    cloud_cover_pct: item.clouds.all,
                    condition: item
                        .weather
                        .first()
                        .map(|w| w.main.clone())
                        .unwrap_or_default(),
                },
            })
        })
        .collect()
}

/// Fold the rain-or-snow sub-fields into one accumulation, 0 when absent.
/// Rain takes precedence over snow when both blocks are present.
fn precipitation(rain: Option<&OwmPrecip>, snow: Option<&OwmPrecip>, three_hour: bool) -> f64 {
    let pick = |p: &OwmPrecip| {
        if three_hour {
            p.three_hour.unwrap_or(0.0)
        } else {
            p.one_hour.unwrap_or(0.0)
        }
    };

    if let Some(r) = rain {
        pick(r)
    } else if let Some(s) = snow {
        pick(s)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_forecast(json: &str) -> Vec<ForecastPoint> {
        let data: OwmForecastResponse = serde_json::from_str(json).unwrap();
        convert_forecast(data)
    }

    #[test]
    fn test_current_conversion_with_rain() {
        let json = r#"{
            "weather": [{"main": "Rain"}],
            "main": {"temp": 18.5, "feels_like": 17.2, "humidity": 72},
            "wind": {"speed": 5.0},
            "clouds": {"all": 40},
            "rain": {"1h": 1.4}
        }"#;
        let data: OwmCurrentResponse = serde_json::from_str(json).unwrap();
        let sample = convert_current(data);
        assert_eq!(sample.temperature_c, 18.5);
        assert_eq!(sample.precipitation_mm, 1.4);
        assert_eq!(sample.condition, "Rain");
    }

    #[test]
    fn test_current_missing_main_block_is_an_error() {
        let json = r#"{
            "weather": [{"main": "Clear"}],
            "wind": {"speed": 2.0},
            "clouds": {"all": 5}
        }"#;
        assert!(serde_json::from_str::<OwmCurrentResponse>(json).is_err());
    }

    #[test]
    fn test_precipitation_defaults_to_zero() {
        assert_eq!(precipitation(None, None, true), 0.0);
        assert_eq!(precipitation(None, None, false), 0.0);
    }

    #[test]
    fn test_snow_used_when_rain_absent() {
        let snow = OwmPrecip {
            one_hour: None,
            three_hour: Some(2.5),
        };
        assert_eq!(precipitation(None, Some(&snow), true), 2.5);
    }

    #[test]
    fn test_forecast_drops_points_without_slot_label() {
        let json = r#"{
            "list": [
                {
                    "dt": 1735689600,
                    "dt_txt": "2025-01-01 00:00:00",
                    "main": {"temp": 10.0, "feels_like": 9.0, "humidity": 60},
                    "weather": [{"main": "Clouds"}],
                    "clouds": {"all": 80},
                    "wind": {"speed": 3.0}
                },
                {
                    "dt": 1735700400,
                    "main": {"temp": 11.0, "feels_like": 10.0, "humidity": 58},
                    "weather": [{"main": "Clouds"}],
                    "clouds": {"all": 75},
                    "wind": {"speed": 3.5}
                }
            ]
        }"#;
        let points = parse_forecast(json);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].label, "2025-01-01 00:00:00");
        assert_eq!(points[0].timestamp, 1735689600);
    }

    #[test]
    fn test_forecast_uses_three_hour_accumulation() {
        let json = r#"{
            "list": [
                {
                    "dt": 1735689600,
                    "dt_txt": "2025-01-01 00:00:00",
                    "main": {"temp": 10.0, "feels_like": 9.0, "humidity": 60},
                    "weather": [{"main": "Rain"}],
                    "clouds": {"all": 80},
                    "wind": {"speed": 3.0},
                    "rain": {"3h": 4.2}
                }
            ]
        }"#;
        let points = parse_forecast(json);
        assert_eq!(points[0].sample.precipitation_mm, 4.2);
    }
}
