//! Access-control display models
//!
//! These back the access page of the dashboard, which shows the platform's
//! role tiers and a recent-activity feed.

use serde::{Deserialize, Serialize};

/// A role tier as displayed on the access page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessRole {
    pub name: String,
    pub level: String,
    pub users: i32,
    pub permissions: Vec<String>,
    pub color: String,
}

/// One line of the recent-activity feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub user: String,
    pub action: String,
    pub role: String,
    pub time: String,
}
