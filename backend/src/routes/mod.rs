//! Route definitions for the Hazard Risk Monitor

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public)
        .nest("/auth", auth_routes(state.clone()))
        // Risk zone dashboard (reads public, mutations protected)
        .nest("/risk-zones", risk_zone_routes(state.clone()))
        // Aggregated forecast views
        .nest("/forecast", forecast_routes(state))
        // Direct classification of a feature vector
        .route("/predict", post(handlers::predict_risk))
        // Historical record
        .nest("/history", history_routes())
        // Analytics dashboards
        .nest("/analytics", analytics_routes())
        // Model explainability
        .nest("/explain", explain_routes())
        // Generated reports
        .nest("/reports", report_routes())
        // Access control overview
        .nest("/access", access_routes())
        // Zone comparison
        .nest("/comparison", comparison_routes())
}

/// Authentication routes (login public, current-user protected)
fn auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/login", post(handlers::login))
        .merge(protected)
}

/// Risk zone routes (reads public, mutations protected)
fn risk_zone_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(handlers::create_risk_zone))
        .route(
            "/:zone_id",
            axum::routing::put(handlers::update_risk_zone).delete(handlers::delete_risk_zone),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(handlers::list_risk_zones))
        .route("/:zone_id", get(handlers::get_risk_zone))
        .merge(protected)
}

/// Forecast view routes (reads public, refresh protected)
fn forecast_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/refresh", post(handlers::refresh_forecasts))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/24h", get(handlers::get_forecast_24h))
        .route("/3day", get(handlers::get_forecast_3day))
        .route("/7day", get(handlers::get_forecast_7day))
        .merge(protected)
}

/// Historical data routes (public)
fn history_routes() -> Router<AppState> {
    Router::new()
        .route("/data", get(handlers::get_historical_data))
        .route("/events", get(handlers::get_historical_events))
}

/// Analytics routes (public)
fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/risk-trend", get(handlers::get_risk_trend))
        .route("/accuracy", get(handlers::get_prediction_accuracy))
        .route("/zone-activity", get(handlers::get_zone_activity))
        .route("/status", get(handlers::get_system_status))
}

/// Explainability routes (public)
fn explain_routes() -> Router<AppState> {
    Router::new()
        .route("/feature-importance", get(handlers::get_feature_importance))
        .route("/prediction-breakdown", get(handlers::get_prediction_breakdown))
        .route("/model-metrics", get(handlers::get_model_metrics))
}

/// Report routes (public)
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_reports))
        .route("/insights", get(handlers::get_insights))
}

/// Access overview routes (public)
fn access_routes() -> Router<AppState> {
    Router::new()
        .route("/roles", get(handlers::get_roles))
        .route("/activity-log", get(handlers::get_activity_log))
}

/// Zone comparison routes (public)
fn comparison_routes() -> Router<AppState> {
    Router::new()
        .route("/zones", get(handlers::get_zone_comparison))
        .route("/trend", get(handlers::get_comparison_trend))
}
