//! Classifier input/output models

use serde::{Deserialize, Serialize};

use crate::models::WeatherSample;

/// Display names of the model's weather-driven features, in model input
/// order. The trailing cluster feature is a placeholder and carries no
/// display name.
pub const FEATURE_NAMES: [&str; 6] = [
    "Temperature",
    "Feels Like",
    "Humidity",
    "Precipitation",
    "Wind Speed",
    "Cloud Cover",
];

/// The fixed-order feature vector consumed by the risk classifier.
///
/// Order matters: the model was trained on exactly this layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    pub temperature_celsius: f64,
    pub feels_like_celsius: f64,
    pub humidity: f64,
    pub precip_mm: f64,
    pub wind_kph: f64,
    pub cloud: f64,
    pub risk_cluster: f64,
}

impl FeatureVector {
    /// Extract features from a normalized weather sample.
    ///
    /// Wind converts from m/s to km/h; the cluster feature is a constant 0.
    pub fn from_sample(sample: &WeatherSample) -> Self {
        Self {
            temperature_celsius: sample.temperature_c,
            feels_like_celsius: sample.feels_like_c,
            humidity: sample.humidity_pct,
            precip_mm: sample.precipitation_mm,
            wind_kph: sample.wind_speed_ms * 3.6,
            cloud: sample.cloud_cover_pct,
            risk_cluster: 0.0,
        }
    }

    /// The vector in model input order.
    pub fn values(&self) -> [f64; 7] {
        [
            self.temperature_celsius,
            self.feels_like_celsius,
            self.humidity,
            self.precip_mm,
            self.wind_kph,
            self.cloud,
            self.risk_cluster,
        ]
    }
}

/// Raw classifier output for one feature vector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Classification {
    /// Discrete risk class, nominally 0..=3
    pub risk_class: i32,
    /// Model confidence in 0..=1
    pub confidence: f64,
}

/// A forecast point after classification, tagged with its zone and slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedSample {
    pub zone: String,
    /// Epoch seconds of the originating forecast slot
    pub timestamp: i64,
    /// Formatted slot label, `YYYY-MM-DD HH:MM:SS`
    pub label: String,
    pub risk_class: i32,
    /// Confidence as integer percent
    pub confidence: i32,
}

impl ClassifiedSample {
    pub fn new(zone: &str, timestamp: i64, label: &str, classification: Classification) -> Self {
        Self {
            zone: zone.to_string(),
            timestamp,
            label: label.to_string(),
            risk_class: classification.risk_class,
            confidence: (classification.confidence * 100.0) as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeatherSample {
        WeatherSample {
            temperature_c: 18.5,
            feels_like_c: 17.2,
            humidity_pct: 72.0,
            precipitation_mm: 1.4,
            wind_speed_ms: 5.0,
            cloud_cover_pct: 40.0,
            condition: "Clouds".to_string(),
        }
    }

    #[test]
    fn test_vector_has_seven_features_in_order() {
        let vector = FeatureVector::from_sample(&sample());
        let values = vector.values();
        assert_eq!(values.len(), 7);
        assert_eq!(values[0], 18.5);
        assert_eq!(values[1], 17.2);
        assert_eq!(values[2], 72.0);
        assert_eq!(values[3], 1.4);
        assert_eq!(values[5], 40.0);
    }

    #[test]
    fn test_wind_converts_to_kph() {
        let vector = FeatureVector::from_sample(&sample());
        assert!((vector.wind_kph - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_cluster_feature_is_constant_zero() {
        let vector = FeatureVector::from_sample(&sample());
        assert_eq!(vector.risk_cluster, 0.0);
    }

    #[test]
    fn test_missing_precipitation_extracts_as_zero() {
        let mut dry = sample();
        dry.precipitation_mm = 0.0;
        let vector = FeatureVector::from_sample(&dry);
        assert_eq!(vector.precip_mm, 0.0);
    }

    #[test]
    fn test_classified_sample_scales_confidence_to_percent() {
        let classified = ClassifiedSample::new(
            "Pacific Northwest",
            1735689600,
            "2025-01-01 00:00:00",
            Classification {
                risk_class: 2,
                confidence: 0.9,
            },
        );
        assert_eq!(classified.confidence, 90);
        assert_eq!(classified.risk_class, 2);
    }
}
