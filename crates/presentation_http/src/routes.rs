//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(handlers::pages::index))
        .route("/nearest_mbta", post(handlers::pages::nearest_mbta))
        // JSON API (v1)
        .route("/v1/stops/nearest", get(handlers::stops::nearest_stop))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Attach state
        .with_state(state)
}
