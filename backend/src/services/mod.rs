//! Business logic services for the Hazard Risk Monitor

pub mod analytics;
pub mod auth;
pub mod explain;
pub mod forecast;
pub mod history;
pub mod reports;
pub mod zone;

pub use analytics::AnalyticsService;
pub use auth::AuthService;
pub use explain::ExplainService;
pub use forecast::ForecastService;
pub use history::HistoryService;
pub use reports::ReportService;
pub use zone::RiskZoneService;
