//! Router assembly for the portlink HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// CORS is permissive (the editor may be served from another origin).
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Descriptor-based checks
        .route(
            "/connections/validate",
            post(handlers::connections::validate),
        )
        .route(
            "/connections/targets",
            post(handlers::connections::targets),
        )
        // Catalog-based checks
        .route(
            "/ports/validate",
            post(handlers::connections::validate_ports),
        )
        .route(
            "/ports/targets",
            post(handlers::connections::port_targets),
        )
        .route("/catalog", get(handlers::catalog::get_catalog))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
