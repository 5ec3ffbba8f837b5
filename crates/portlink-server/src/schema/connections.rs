//! Connection check request and response types.

use serde::{Deserialize, Serialize};

use portlink_check::{check_connection, validate_connection, ConnectionError, Verdict};
use portlink_core::{FieldType, PortRef};

/// Request to check a single edge between two field types.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidateConnectionRequest {
    /// Type of the output port the edge starts at.
    pub source: FieldType,
    /// Type of the input port the edge ends at.
    pub target: FieldType,
}

/// Request to check a single edge between two catalog ports.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidatePortsRequest {
    /// Output port, resolved against the catalog's outputs.
    pub source: PortRef,
    /// Input port, resolved against the catalog's inputs.
    pub target: PortRef,
}

/// Outcome of a connection check.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionResponse {
    /// Whether the edge may be committed.
    pub connectable: bool,
    /// Which path reached the decision.
    pub verdict: Verdict,
    /// Rejection details, absent when connectable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ConnectionError>,
}

impl ConnectionResponse {
    pub fn evaluate(source: &FieldType, target: &FieldType) -> Self {
        let verdict = check_connection(source, target);
        ConnectionResponse {
            connectable: verdict.is_connectable(),
            verdict,
            error: validate_connection(source, target).err(),
        }
    }
}

/// Request to filter candidate target types for one source.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TargetsRequest {
    pub source: FieldType,
    pub candidates: Vec<FieldType>,
}

/// Indices into [`TargetsRequest::candidates`] that accept the source.
#[derive(Debug, Clone, Serialize)]
pub struct TargetsResponse {
    pub indices: Vec<usize>,
}

/// Request for every catalog input port accepting an output port.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortTargetsRequest {
    pub source: PortRef,
}

/// Catalog input ports accepting the requested output port.
#[derive(Debug, Clone, Serialize)]
pub struct PortTargetsResponse {
    pub ports: Vec<PortRef>,
}
