//! HTTP handler modules for the portlink API.
//!
//! Handlers are thin: they parse requests, delegate to `portlink_check`, and
//! return JSON responses.

pub mod catalog;
pub mod connections;
