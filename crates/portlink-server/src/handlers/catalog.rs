//! Catalog listing handler.

use axum::extract::State;
use axum::Json;

use portlink_core::TypeCatalog;

use crate::state::AppState;

/// Returns the loaded catalog document.
///
/// `GET /catalog`
pub async fn get_catalog(State(state): State<AppState>) -> Json<TypeCatalog> {
    Json(state.catalog.as_ref().clone())
}
