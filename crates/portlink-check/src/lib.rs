//! Connection checking for node-graph ports.
//!
//! The [`connect`] module decides whether an edge from an output port to an
//! input port is legal, given the two ports' declared field types.

pub mod connect;

pub use connect::{
    are_types_equal, check_connection, connectable_inputs, connectable_targets, is_connectable,
    validate_connection, ConnectionError, ConnectionRule, FixSuggestion, Verdict,
};
