//! CGM API Server
//!
//! Read-only access to patient records and their visits.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresPatientRepository, PostgresVisitRepository};
use app::{PatientLookupService, VisitLookupService};
use config::Config;
use domain::ports::{PatientRepository, VisitRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub patient_service: Arc<PatientLookupService<dyn PatientRepository>>,
    pub visit_service: Arc<VisitLookupService<dyn VisitRepository>>,
}

impl AppState {
    pub fn new(patients: Arc<dyn PatientRepository>, visits: Arc<dyn VisitRepository>) -> Self {
        Self {
            patient_service: Arc::new(PatientLookupService::new(patients)),
            visit_service: Arc::new(VisitLookupService::new(visits)),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
pub fn router(state: AppState, cors_allow_any: bool) -> Router {
    let cors = if cors_allow_any {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/health", get(health))
        .route("/patients", get(handlers::list_patients))
        .route("/patients/:id", get(handlers::get_patient))
        .route("/visits", get(handlers::list_visits))
        .route("/visits/:id", get(handlers::get_visit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cgm_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CGM API...");

    let config = Config::from_env()?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    let state = AppState::new(
        Arc::new(PostgresPatientRepository::new(db.clone())),
        Arc::new(PostgresVisitRepository::new(db)),
    );

    let app = router(state, config.cors_allow_any);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
