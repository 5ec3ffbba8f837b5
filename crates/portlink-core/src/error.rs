//! Core error types for portlink-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering the
//! ways a field type descriptor or a catalog document can be rejected.

use thiserror::Error;

use crate::catalog::Direction;

/// Core errors produced by the portlink-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field type descriptor carried an empty base name.
    #[error("field type name must not be empty")]
    EmptyTypeName,

    /// A descriptor claimed to be both a collection and collection-or-scalar.
    #[error("field type '{name}' cannot be both a collection and collection-or-scalar")]
    ConflictingPlurality { name: String },

    /// Text notation that does not describe a field type.
    #[error("malformed field type '{input}': {reason}")]
    MalformedType { input: String, reason: String },

    /// Attempting to register a node type that already exists in the catalog.
    #[error("duplicate node type: '{node_type}'")]
    DuplicateNodeType { node_type: String },

    /// A node type was not found in the catalog.
    #[error("unknown node type: '{node_type}'")]
    UnknownNodeType { node_type: String },

    /// A node type exists but has no port with the given name.
    #[error("node type '{node_type}' has no {direction} port '{port}'")]
    UnknownPort {
        node_type: String,
        port: String,
        direction: Direction,
    },

    /// Reading a catalog document failed.
    #[error("catalog i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog document was not valid JSON or did not match the schema.
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
