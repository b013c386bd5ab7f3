//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for the month-end reports
//! - Error responses built from the shared `AppError`

pub mod routes;

use std::sync::Arc;

use axum::Router;
use chrono_tz::Tz;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Time zone that decides what "today" is when no date is given.
    pub time_zone: Tz,
}

impl AppState {
    /// Creates the state from a connection and the report time zone.
    #[must_use]
    pub fn new(db: DatabaseConnection, time_zone: Tz) -> Self {
        Self {
            db: Arc::new(db),
            time_zone,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
