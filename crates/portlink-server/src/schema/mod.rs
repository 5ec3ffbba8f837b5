//! API schema types for request/response definitions.
//!
//! Types use serde derives for JSON serialization/deserialization. Field
//! types travel in the editor's flat descriptor shape.

pub mod connections;
