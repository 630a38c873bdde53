//! Domain layer containing business entities and contracts.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`context`] - Cancellable operation context
//! - [`pagination`] - Range to limit/offset resolution
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Orchestration lives in [`crate::application::services`].

pub mod context;
pub mod entities;
pub mod pagination;
pub mod repositories;
