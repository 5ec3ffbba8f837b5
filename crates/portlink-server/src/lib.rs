//! HTTP/JSON API exposing port compatibility checks to a node-graph editor.
//!
//! The editor calls these endpoints before committing an edge and while a
//! connection is being dragged, to highlight the input ports that would
//! accept it. This crate contains the API schema types, error handling,
//! application state, and route definitions.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
