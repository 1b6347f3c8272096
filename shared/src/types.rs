//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Severity buckets used by dashboard widgets that do not carry the full
/// four-level risk scale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Moderate,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Moderate => "moderate",
            Severity::High => "high",
        }
    }
}
