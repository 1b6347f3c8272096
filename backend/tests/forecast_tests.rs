//! Forecast aggregation tests
//!
//! Property-based and unit tests for the three aggregate views:
//! - Hourly outlook averaging and slot selection
//! - 3-day breakdown bucket counting
//! - Weekly trend derivation

use proptest::prelude::*;

use shared::{
    build_daily_breakdown, build_hourly_outlook, build_weekly_trend, Classification,
    ClassifiedSample, TrendLabel,
};

fn classified(zone: &str, label: &str, class: i32, confidence: f64) -> ClassifiedSample {
    ClassifiedSample::new(
        zone,
        0,
        label,
        Classification {
            risk_class: class,
            confidence,
        },
    )
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;
    use chrono::NaiveDate;

    /// A full 5-day forecast series for two zones produces all three views
    #[test]
    fn test_full_batch_produces_all_views() {
        let mut batch = Vec::new();
        for day in 1..=5 {
            for hour in [0, 6, 12, 18] {
                let label = format!("2025-06-{:02} {:02}:00:00", day, hour);
                batch.push(classified("Pacific Northwest", &label, 2, 0.9));
                batch.push(classified("Caribbean Basin", &label, 1, 0.8));
            }
        }

        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let hourly = build_hourly_outlook(&batch);
        let daily = build_daily_breakdown(&batch, today);
        let weekly = build_weekly_trend(&batch);

        assert_eq!(hourly.len(), 7);
        assert_eq!(daily.len(), 3);
        assert_eq!(weekly.len(), 5);
    }

    /// Hourly slots come from the earliest labels in lexicographic order
    #[test]
    fn test_hourly_slot_ordering() {
        let batch = vec![
            classified("Arctic Circle", "2025-06-02 00:00:00", 1, 0.8),
            classified("Arctic Circle", "2025-06-01 21:00:00", 1, 0.8),
            classified("Arctic Circle", "2025-06-01 18:00:00", 1, 0.8),
        ];
        let view = build_hourly_outlook(&batch);
        assert_eq!(view[0].hour, "18:00");
        assert_eq!(view[1].hour, "21:00");
        assert_eq!(view[2].hour, "00:00");
    }

    /// Averaged class 1.5 truncates to risk 49, not rounds to 50
    #[test]
    fn test_hourly_risk_truncates() {
        let batch = vec![
            classified("Pacific Northwest", "2025-06-01 00:00:00", 1, 0.8),
            classified("Caribbean Basin", "2025-06-01 00:00:00", 2, 0.8),
        ];
        let view = build_hourly_outlook(&batch);
        assert_eq!(view[0].risk, 49);
    }

    /// Samples outside the 3-day window are ignored by the breakdown
    #[test]
    fn test_daily_ignores_out_of_window_samples() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let batch = vec![
            classified("Arctic Circle", "2025-06-01 00:00:00", 0, 0.8),
            classified("Arctic Circle", "2025-06-04 00:00:00", 0, 0.8),
            classified("Arctic Circle", "2025-05-31 00:00:00", 0, 0.8),
        ];
        let view = build_daily_breakdown(&batch, today);
        let total: i64 = view.iter().map(|d| d.safe + d.moderate + d.high).sum();
        assert_eq!(total, 1);
    }

    /// Unparseable slot labels never reach the weekly view
    #[test]
    fn test_weekly_drops_malformed_labels() {
        let batch = vec![
            classified("Arctic Circle", "2025-06-01 00:00:00", 1, 0.8),
            classified("Arctic Circle", "not-a-date", 3, 0.9),
        ];
        let view = build_weekly_trend(&batch);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].day, "Sun");
    }

    /// The weekly trend label is a pure function of the risk index
    #[test]
    fn test_weekly_trend_follows_index() {
        let batch = vec![
            classified("Caribbean Basin", "2025-06-01 00:00:00", 3, 0.9),
            classified("Caribbean Basin", "2025-06-02 00:00:00", 0, 0.9),
        ];
        let view = build_weekly_trend(&batch);
        assert_eq!(view[0].risk_index, 99);
        assert_eq!(view[0].trend, TrendLabel::Critical);
        assert_eq!(view[1].risk_index, 0);
        assert_eq!(view[1].trend, TrendLabel::Declining);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;
    use chrono::NaiveDate;

    /// Strategy for generating risk classes in the model's output range
    fn class_strategy() -> impl Strategy<Value = i32> {
        0..=3i32
    }

    /// Strategy for generating confidences in the model's output range
    fn confidence_strategy() -> impl Strategy<Value = f64> {
        (0u32..=100).prop_map(|n| n as f64 / 100.0)
    }

    /// Strategy for generating one classified forecast batch across the
    /// first week of June 2025
    fn batch_strategy() -> impl Strategy<Value = Vec<ClassifiedSample>> {
        prop::collection::vec(
            (
                prop_oneof![
                    Just("Pacific Northwest"),
                    Just("Caribbean Basin"),
                    Just("Arctic Circle"),
                ],
                1..=7u32,
                prop_oneof![Just(0u32), Just(3), Just(6), Just(9), Just(12)],
                class_strategy(),
                confidence_strategy(),
            )
                .prop_map(|(zone, day, hour, class, confidence)| {
                    let label = format!("2025-06-{:02} {:02}:00:00", day, hour);
                    classified(zone, &label, class, confidence)
                }),
            1..60,
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Hourly view never exceeds 7 entries and averages stay in range
        #[test]
        fn prop_hourly_bounded(batch in batch_strategy()) {
            let view = build_hourly_outlook(&batch);
            prop_assert!(view.len() <= 7);
            for entry in &view {
                prop_assert!(entry.risk >= 0 && entry.risk <= 99);
                prop_assert!(entry.confidence >= 0 && entry.confidence <= 100);
            }
        }

        /// Hourly entries track the first 7 distinct slot labels in
        /// lexicographic order. Hour strings alone may repeat across dates,
        /// so the check runs over the underlying labels.
        #[test]
        fn prop_hourly_follows_sorted_slots(batch in batch_strategy()) {
            let view = build_hourly_outlook(&batch);

            let mut labels: Vec<&str> = batch.iter().map(|s| s.label.as_str()).collect();
            labels.sort_unstable();
            labels.dedup();
            labels.truncate(7);

            let expected: Vec<&str> = labels.iter().map(|l| &l[11..16]).collect();
            let actual: Vec<&str> = view.iter().map(|e| e.hour.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }

        /// The builders are deterministic over the same batch
        #[test]
        fn prop_builders_deterministic(batch in batch_strategy()) {
            let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
            prop_assert_eq!(build_hourly_outlook(&batch), build_hourly_outlook(&batch));
            prop_assert_eq!(
                build_daily_breakdown(&batch, today),
                build_daily_breakdown(&batch, today)
            );
            prop_assert_eq!(build_weekly_trend(&batch), build_weekly_trend(&batch));
        }

        /// The 3-day breakdown always has exactly 3 labelled entries
        #[test]
        fn prop_daily_exactly_three(batch in batch_strategy()) {
            let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
            let view = build_daily_breakdown(&batch, today);
            prop_assert_eq!(view.len(), 3);
            prop_assert_eq!(&view[0].day, "Today");
            prop_assert_eq!(&view[1].day, "Tomorrow");
            prop_assert_eq!(&view[2].day, "Day 3");
        }

        /// Every in-window sample lands in exactly one bucket
        #[test]
        fn prop_daily_counts_partition(batch in batch_strategy()) {
            let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
            let view = build_daily_breakdown(&batch, today);

            let in_window = batch
                .iter()
                .filter(|s| {
                    s.label.starts_with("2025-06-01")
                        || s.label.starts_with("2025-06-02")
                        || s.label.starts_with("2025-06-03")
                })
                .count() as i64;
            let counted: i64 = view.iter().map(|d| d.safe + d.moderate + d.high).sum();

            prop_assert_eq!(counted, in_window);
        }

        /// Weekly view has one entry per distinct date, trend matching index
        #[test]
        fn prop_weekly_trend_purity(batch in batch_strategy()) {
            let view = build_weekly_trend(&batch);

            let mut dates: Vec<&str> = batch
                .iter()
                .filter_map(|s| s.label.split(' ').next())
                .collect();
            dates.sort_unstable();
            dates.dedup();
            prop_assert_eq!(view.len(), dates.len());

            for entry in &view {
                prop_assert!(entry.risk_index >= 0 && entry.risk_index <= 99);
                prop_assert_eq!(entry.trend, TrendLabel::from_index(entry.risk_index));
            }
        }
    }
}
