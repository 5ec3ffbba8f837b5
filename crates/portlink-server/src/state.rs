//! Application state shared by all handlers.
//!
//! The catalog is read-only once the server starts, so it sits behind a
//! plain `Arc` and handlers read it without locking.

use std::path::Path;
use std::sync::Arc;

use portlink_core::TypeCatalog;

use crate::error::ApiError;

/// Shared application state for the HTTP server.
#[derive(Clone, Default)]
pub struct AppState {
    /// Node templates used to resolve port references.
    pub catalog: Arc<TypeCatalog>,
}

impl AppState {
    /// Creates state around an already-built catalog.
    pub fn with_catalog(catalog: TypeCatalog) -> Self {
        AppState {
            catalog: Arc::new(catalog),
        }
    }

    /// Creates state from an optional catalog document on disk.
    ///
    /// With no path the catalog is empty; only the descriptor-based
    /// endpoints are then useful.
    pub fn new(catalog_path: Option<&Path>) -> Result<Self, ApiError> {
        let catalog = match catalog_path {
            Some(path) => TypeCatalog::from_path(path)?,
            None => TypeCatalog::new(),
        };
        Ok(Self::with_catalog(catalog))
    }
}
