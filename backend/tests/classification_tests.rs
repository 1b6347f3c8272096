//! Risk classification tests
//!
//! Property-based and unit tests for the classifier interface:
//! - Feature extraction layout and unit conversions
//! - Risk level mapping from raw classes
//! - Classified sample confidence scaling

use proptest::prelude::*;

use shared::{Classification, ClassifiedSample, FeatureVector, RiskLevel, WeatherSample, FEATURE_NAMES};

fn sample(temp: f64, wind_ms: f64, precip: f64) -> WeatherSample {
    WeatherSample {
        temperature_c: temp,
        feels_like_c: temp - 1.0,
        humidity_pct: 65.0,
        precipitation_mm: precip,
        wind_speed_ms: wind_ms,
        cloud_cover_pct: 50.0,
        condition: "Clouds".to_string(),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// The model consumes exactly 7 features, 6 of them named
    #[test]
    fn test_feature_layout() {
        let vector = FeatureVector::from_sample(&sample(20.0, 5.0, 0.0));
        assert_eq!(vector.values().len(), 7);
        assert_eq!(FEATURE_NAMES.len(), 6);
    }

    /// Wind is the only feature whose unit changes during extraction
    #[test]
    fn test_only_wind_is_converted() {
        let weather = sample(20.0, 10.0, 2.5);
        let vector = FeatureVector::from_sample(&weather);

        assert_eq!(vector.temperature_celsius, weather.temperature_c);
        assert_eq!(vector.feels_like_celsius, weather.feels_like_c);
        assert_eq!(vector.humidity, weather.humidity_pct);
        assert_eq!(vector.precip_mm, weather.precipitation_mm);
        assert_eq!(vector.cloud, weather.cloud_cover_pct);
        assert!((vector.wind_kph - 36.0).abs() < 1e-9);
    }

    /// Risk levels order from safe to critical
    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Safe < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    /// Labels round-trip through parse
    #[test]
    fn test_risk_level_label_round_trip() {
        for level in [
            RiskLevel::Safe,
            RiskLevel::Moderate,
            RiskLevel::High,
            RiskLevel::Critical,
        ] {
            assert_eq!(RiskLevel::parse(level.as_str()), Some(level));
        }
        assert_eq!(RiskLevel::parse("extreme"), None);
    }

    /// Fractional confidence becomes a truncated integer percent
    #[test]
    fn test_confidence_scaling() {
        let classified = ClassifiedSample::new(
            "Arctic Circle",
            0,
            "2025-06-01 00:00:00",
            Classification {
                risk_class: 1,
                confidence: 0.876,
            },
        );
        assert_eq!(classified.confidence, 87);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn temperature_strategy() -> impl Strategy<Value = f64> {
        -40.0..=50.0f64
    }

    fn wind_strategy() -> impl Strategy<Value = f64> {
        0.0..=60.0f64
    }

    fn precip_strategy() -> impl Strategy<Value = f64> {
        0.0..=80.0f64
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Extraction preserves the model's input order
        #[test]
        fn prop_feature_order_stable(
            temp in temperature_strategy(),
            wind in wind_strategy(),
            precip in precip_strategy()
        ) {
            let vector = FeatureVector::from_sample(&sample(temp, wind, precip));
            let values = vector.values();

            prop_assert_eq!(values[0], vector.temperature_celsius);
            prop_assert_eq!(values[1], vector.feels_like_celsius);
            prop_assert_eq!(values[2], vector.humidity);
            prop_assert_eq!(values[3], vector.precip_mm);
            prop_assert_eq!(values[4], vector.wind_kph);
            prop_assert_eq!(values[5], vector.cloud);
            prop_assert_eq!(values[6], vector.risk_cluster);
        }

        /// The cluster placeholder is always zero
        #[test]
        fn prop_cluster_always_zero(
            temp in temperature_strategy(),
            wind in wind_strategy(),
            precip in precip_strategy()
        ) {
            let vector = FeatureVector::from_sample(&sample(temp, wind, precip));
            prop_assert_eq!(vector.risk_cluster, 0.0);
        }

        /// Wind conversion scales by exactly 3.6
        #[test]
        fn prop_wind_conversion(wind in wind_strategy()) {
            let vector = FeatureVector::from_sample(&sample(15.0, wind, 0.0));
            prop_assert!((vector.wind_kph - wind * 3.6).abs() < 1e-9);
        }

        /// Every raw class maps to a level, clamped at the ends
        #[test]
        fn prop_risk_level_total_and_clamped(class in -100..=100i32) {
            let level = RiskLevel::from_class(class);

            if class <= 0 {
                prop_assert_eq!(level, RiskLevel::Safe);
            } else if class >= 3 {
                prop_assert_eq!(level, RiskLevel::Critical);
            }
        }

        /// The class-to-level mapping is monotone
        #[test]
        fn prop_risk_level_monotone(a in -10..=10i32, b in -10..=10i32) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(RiskLevel::from_class(lo) <= RiskLevel::from_class(hi));
        }

        /// Model confidence in 0..=1 always scales into 0..=100
        #[test]
        fn prop_confidence_percent_bounded(confidence in 0.0..=1.0f64, class in 0..=3i32) {
            let classified = ClassifiedSample::new(
                "Pacific Northwest",
                0,
                "2025-06-01 00:00:00",
                Classification {
                    risk_class: class,
                    confidence,
                },
            );
            prop_assert!(classified.confidence >= 0);
            prop_assert!(classified.confidence <= 100);
        }
    }
}
