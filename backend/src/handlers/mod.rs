pub mod access;
pub mod analytics;
pub mod auth;
pub mod comparison;
pub mod explain;
pub mod forecast;
pub mod health;
pub mod history;
pub mod predict;
pub mod reports;
pub mod risk_zones;

pub use access::{get_activity_log, get_roles};
pub use analytics::{get_prediction_accuracy, get_risk_trend, get_system_status, get_zone_activity};
pub use auth::{login, me};
pub use comparison::{get_comparison_trend, get_zone_comparison};
pub use explain::{get_feature_importance, get_model_metrics, get_prediction_breakdown};
pub use forecast::{get_forecast_24h, get_forecast_3day, get_forecast_7day, refresh_forecasts};
pub use health::health_check;
pub use history::{get_historical_data, get_historical_events};
pub use predict::predict_risk;
pub use reports::{get_insights, get_reports};
pub use risk_zones::{
    create_risk_zone, delete_risk_zone, get_risk_zone, list_risk_zones, update_risk_zone,
};
