//! Binary entrypoint for the portlink HTTP server.
//!
//! Reads configuration from environment variables:
//! - `PORTLINK_CATALOG`: path to a catalog document (default: empty catalog)
//! - `PORTLINK_PORT`: Server listen port (default: "3000")

use std::path::PathBuf;

use portlink_server::router::build_router;
use portlink_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let catalog_path = std::env::var("PORTLINK_CATALOG").ok().map(PathBuf::from);
    let port = std::env::var("PORTLINK_PORT")
        .unwrap_or_else(|_| "3000".to_string());

    let state = AppState::new(catalog_path.as_deref())
        .expect("Failed to initialize application state");
    tracing::info!(templates = state.catalog.len(), "catalog loaded");

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("portlink server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
