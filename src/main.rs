//! RiskGauge service entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use riskgauge::adapters::http::{assessment_routes, AssessmentHandlers};
use riskgauge::adapters::{PgAssessmentRepository, ResendNotifier};
use riskgauge::application::handlers::assessment::{
    GetAssessmentHandler, SubmitAssessmentHandler, UpdateAssessmentHandler,
};
use riskgauge::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    tracing::info!(environment = ?config.server.environment, "starting riskgauge");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    let repository = Arc::new(PgAssessmentRepository::new(pool));
    let notifier = Arc::new(ResendNotifier::new(config.email.clone()));

    let handlers = AssessmentHandlers::new(
        Arc::new(SubmitAssessmentHandler::new(repository.clone(), notifier)),
        Arc::new(GetAssessmentHandler::new(repository.clone())),
        Arc::new(UpdateAssessmentHandler::new(repository)),
    );

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/assessments", assessment_routes(handlers))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                )))
                .layer(cors_layer(&config)),
        );

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<http::HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        // No explicit allowlist configured; typical for development.
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([http::Method::GET, http::Method::POST, http::Method::PUT])
            .allow_headers([http::header::CONTENT_TYPE])
    }
}
