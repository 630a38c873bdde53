//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Request/response logging
//! - [`cors`] - Cross-origin policy for the frontend

pub mod cors;
pub mod tracing;
