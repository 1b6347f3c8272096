//! Access page handlers
//!
//! The role tiers and activity feed are display-only fixtures, served as
//! literals rather than stored state.

use axum::Json;
use shared::{AccessRole, ActivityLogEntry};

/// Platform role tiers
pub async fn get_roles() -> Json<Vec<AccessRole>> {
    Json(vec![
        AccessRole {
            name: "Administrator".to_string(),
            level: "full".to_string(),
            users: 3,
            permissions: vec![
                "Full system access".to_string(),
                "User management".to_string(),
                "Configuration control".to_string(),
                "Data export (unrestricted)".to_string(),
                "Alert configuration".to_string(),
                "Report generation".to_string(),
            ],
            color: "#ff3366".to_string(),
        },
        AccessRole {
            name: "Analyst".to_string(),
            level: "advanced".to_string(),
            users: 12,
            permissions: vec![
                "View all dashboards".to_string(),
                "Generate reports".to_string(),
                "Export data (restricted)".to_string(),
                "Create custom views".to_string(),
                "Access historical data".to_string(),
            ],
            color: "#00d4ff".to_string(),
        },
        AccessRole {
            name: "Viewer".to_string(),
            level: "basic".to_string(),
            users: 47,
            permissions: vec![
                "View dashboards (read-only)".to_string(),
                "Access forecasting data".to_string(),
                "View reports".to_string(),
                "Basic alert notifications".to_string(),
            ],
            color: "#00ff87".to_string(),
        },
    ])
}

/// Recent activity feed
pub async fn get_activity_log() -> Json<Vec<ActivityLogEntry>> {
    let entries = [
        ("Admin Sarah K.", "Generated monthly report", "Administrator", "5 min ago"),
        ("Analyst Mike T.", "Viewed Pacific NW zone details", "Analyst", "12 min ago"),
        ("Viewer John D.", "Accessed risk dashboard", "Viewer", "18 min ago"),
        ("Admin David L.", "Modified alert thresholds", "Administrator", "1 hour ago"),
        ("Analyst Emma R.", "Exported zone comparison data", "Analyst", "2 hours ago"),
    ];

    Json(
        entries
            .into_iter()
            .map(|(user, action, role, time)| ActivityLogEntry {
                user: user.to_string(),
                action: action.to_string(),
                role: role.to_string(),
                time: time.to_string(),
            })
            .collect(),
    )
}
