//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the repository traits defined by the domain
//! layer.

pub mod persistence;
