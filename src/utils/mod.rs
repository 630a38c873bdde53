//! Utility functions used across the application.
//!
//! - [`code_generator`] - Short name generation and validation
//! - [`db_error`] - sqlx error classification

pub mod code_generator;
pub mod db_error;
