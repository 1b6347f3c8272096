//! Aggregate forecast views and the pure builders that derive them
//!
//! All three views are rebuilt from one batch of classified forecast samples
//! per aggregation run. The builders are pure functions so they can be
//! exercised directly by the test suites without a database or classifier.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::ClassifiedSample;

/// One entry of the hourly outlook chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HourlyOutlook {
    /// Slot label, `HH:MM`
    pub hour: String,
    /// Risk score on a 0-100 scale
    pub risk: i32,
    /// Confidence as integer percent
    pub confidence: i32,
}

/// Per-day sample counts for the next three calendar days
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyOutlook {
    pub day: String,
    pub safe: i64,
    pub moderate: i64,
    pub high: i64,
}

/// Qualitative trend attached to each weekly entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    Stable,
    Rising,
    Declining,
    Critical,
}

impl TrendLabel {
    /// Derive the trend from a 0-100 risk index.
    pub fn from_index(index: i32) -> Self {
        if index > 60 {
            TrendLabel::Critical
        } else if index > 40 {
            TrendLabel::Rising
        } else if index < 20 {
            TrendLabel::Declining
        } else {
            TrendLabel::Stable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrendLabel::Stable => "stable",
            TrendLabel::Rising => "rising",
            TrendLabel::Declining => "declining",
            TrendLabel::Critical => "critical",
        }
    }

    /// Parse a stored label back into the enum.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "stable" => Some(TrendLabel::Stable),
            "rising" => Some(TrendLabel::Rising),
            "declining" => Some(TrendLabel::Declining),
            "critical" => Some(TrendLabel::Critical),
            _ => None,
        }
    }
}

/// One entry of the weekly trend view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTrend {
    /// Weekday name, `Mon` through `Sun`
    pub day: String,
    /// Risk index on a 0-100 scale
    pub risk_index: i32,
    pub trend: TrendLabel,
}

/// Scale factor mapping the 0-3 class range onto a 0-100 score.
const RISK_SCALE: f64 = 33.0;

/// Build the hourly outlook from a classified batch.
///
/// Takes the first 7 distinct slot labels in lexicographic order, then
/// averages risk class and confidence across every zone sharing the slot.
pub fn build_hourly_outlook(samples: &[ClassifiedSample]) -> Vec<HourlyOutlook> {
    let mut labels: Vec<&str> = samples.iter().map(|s| s.label.as_str()).collect();
    labels.sort_unstable();
    labels.dedup();
    labels.truncate(7);

    labels
        .into_iter()
        .map(|label| {
            let slot: Vec<&ClassifiedSample> =
                samples.iter().filter(|s| s.label == label).collect();
            let avg_risk = slot.iter().map(|s| s.risk_class as f64).sum::<f64>()
                / slot.len() as f64;
            let avg_conf = slot.iter().map(|s| s.confidence as f64).sum::<f64>()
                / slot.len() as f64;

            HourlyOutlook {
                hour: slot_hour(label),
                risk: (avg_risk * RISK_SCALE) as i32,
                confidence: avg_conf as i32,
            }
        })
        .collect()
}

/// Build the 3-day breakdown for day offsets 0, 1 and 2 from `today`.
///
/// Classes at or above 2 merge into the `high` bucket. Days without any
/// matching samples emit a zero-filled entry, so the view always has
/// exactly 3 entries.
pub fn build_daily_breakdown(samples: &[ClassifiedSample], today: NaiveDate) -> Vec<DailyOutlook> {
    const DAY_LABELS: [&str; 3] = ["Today", "Tomorrow", "Day 3"];

    (0..3)
        .map(|offset| {
            let date = (today + Duration::days(offset)).format("%Y-%m-%d").to_string();
            let day: Vec<&ClassifiedSample> = samples
                .iter()
                .filter(|s| s.label.starts_with(&date))
                .collect();

            DailyOutlook {
                day: DAY_LABELS[offset as usize].to_string(),
                safe: day.iter().filter(|s| s.risk_class == 0).count() as i64,
                moderate: day.iter().filter(|s| s.risk_class == 1).count() as i64,
                high: day.iter().filter(|s| s.risk_class >= 2).count() as i64,
            }
        })
        .collect()
}

/// Build the weekly trend, one entry per distinct date in the batch.
///
/// Dates sort ascending; undated or unparseable labels are dropped. Each
/// entry carries the weekday name, the scaled risk index and a trend label
/// derived from the index alone.
pub fn build_weekly_trend(samples: &[ClassifiedSample]) -> Vec<WeeklyTrend> {
    let mut dates: Vec<&str> = samples.iter().map(|s| slot_date(&s.label)).collect();
    dates.sort_unstable();
    dates.dedup();

    dates
        .into_iter()
        .filter_map(|date| {
            let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
            let day: Vec<&ClassifiedSample> = samples
                .iter()
                .filter(|s| slot_date(&s.label) == date)
                .collect();
            let avg_risk = day.iter().map(|s| s.risk_class as f64).sum::<f64>()
                / day.len() as f64;
            let risk_index = (avg_risk * RISK_SCALE) as i32;

            Some(WeeklyTrend {
                day: parsed.format("%a").to_string(),
                risk_index,
                trend: TrendLabel::from_index(risk_index),
            })
        })
        .collect()
}

/// `"2025-01-01 12:00:00"` -> `"12:00"`
fn slot_hour(label: &str) -> String {
    label
        .split(' ')
        .nth(1)
        .map(|time| time.get(..5).unwrap_or(time))
        .unwrap_or(label)
        .to_string()
}

/// `"2025-01-01 12:00:00"` -> `"2025-01-01"`
fn slot_date(label: &str) -> &str {
    label.split(' ').next().unwrap_or(label)
}
