//! Hazard Risk Monitor - Backend Server
//!
//! Dashboard backend that keeps a set of monitored zones and three
//! aggregated forecast views current by fetching live weather data and
//! classifying it through an external risk model.

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod middleware;
mod models;
mod routes;
mod seed;
mod services;
mod zones;

pub use config::Config;

use external::{InferenceClient, RiskModel, WeatherClient};
use services::ForecastService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub config: Arc<Config>,
    pub weather: WeatherClient,
    pub model: Arc<dyn RiskModel>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hzm_server=debug,tower_http=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Hazard Risk Monitor Server");
    tracing::info!("Environment: {}", config.environment);

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database.url)
        .await?;

    tracing::info!("Database connection established");

    // Run migrations in development
    if config.environment == "development" {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&db_pool).await?;
        tracing::info!("Migrations completed");
    }

    // Seed baseline collections (no-op when already populated)
    seed::seed_database(&db_pool).await?;

    // External clients
    let weather = WeatherClient::new(
        config.weather.api_endpoint.clone(),
        config.weather.api_key.clone(),
    );
    let model: Arc<dyn RiskModel> = Arc::new(InferenceClient::from_config(&config.inference));

    // Create application state
    let state = AppState {
        db: db_pool,
        config: Arc::new(config.clone()),
        weather,
        model,
    };

    // Bring the forecast views up to date in the background when empty;
    // failures are logged and the seeded zone state stays authoritative.
    spawn_bootstrap_pipeline(&state);

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run the full pipeline once, detached, when the hourly view is empty.
fn spawn_bootstrap_pipeline(state: &AppState) {
    let service = ForecastService::new(state.db.clone(), state.weather.clone(), state.model.clone());
    let db = state.db.clone();

    tokio::spawn(async move {
        let populated = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM hourly_outlook")
            .fetch_one(&db)
            .await
            .unwrap_or(0);

        if populated > 0 {
            return;
        }

        tracing::info!("Forecast views empty; running bootstrap pipeline");
        if let Err(e) = service.update_risk_zones().await {
            tracing::error!("Bootstrap zone update failed: {}", e);
        }
        if let Err(e) = service.update_forecasts().await {
            tracing::error!("Bootstrap forecast aggregation failed: {}", e);
        }
    });
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Hazard Risk Monitor API v1.0"
}
