//! Connection check handlers.

use axum::extract::State;
use axum::Json;

use portlink_check::{connectable_inputs, connectable_targets};
use portlink_core::Direction;

use crate::error::ApiError;
use crate::schema::connections::{
    ConnectionResponse, PortTargetsRequest, PortTargetsResponse, TargetsRequest,
    TargetsResponse, ValidateConnectionRequest, ValidatePortsRequest,
};
use crate::state::AppState;

/// Checks an edge between two field types.
///
/// `POST /connections/validate`
pub async fn validate(Json(req): Json<ValidateConnectionRequest>) -> Json<ConnectionResponse> {
    Json(ConnectionResponse::evaluate(&req.source, &req.target))
}

/// Filters candidate target types for one source type.
///
/// `POST /connections/targets`
pub async fn targets(Json(req): Json<TargetsRequest>) -> Json<TargetsResponse> {
    Json(TargetsResponse {
        indices: connectable_targets(&req.source, &req.candidates),
    })
}

/// Checks an edge between two catalog ports.
///
/// `POST /ports/validate`
pub async fn validate_ports(
    State(state): State<AppState>,
    Json(req): Json<ValidatePortsRequest>,
) -> Result<Json<ConnectionResponse>, ApiError> {
    let source = state.catalog.resolve(&req.source, Direction::Output)?;
    let target = state.catalog.resolve(&req.target, Direction::Input)?;
    tracing::debug!(source = %req.source, target = %req.target, "validating ports");
    Ok(Json(ConnectionResponse::evaluate(source, target)))
}

/// Lists every catalog input port that accepts an output port.
///
/// `POST /ports/targets`
pub async fn port_targets(
    State(state): State<AppState>,
    Json(req): Json<PortTargetsRequest>,
) -> Result<Json<PortTargetsResponse>, ApiError> {
    let source = state.catalog.resolve(&req.source, Direction::Output)?;
    Ok(Json(PortTargetsResponse {
        ports: connectable_inputs(&state.catalog, source),
    }))
}
