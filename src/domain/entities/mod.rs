//! Core domain entities.
//!
//! Entities are plain data structures. Creation and replacement inputs have
//! their own types so the store never sees a caller-chosen id:
//!
//! - [`Link`] - a persisted short link
//! - [`NewLink`] - input for creating a link
//! - [`LinkUpdate`] - full replacement of an existing link

pub mod link;

pub use link::{Link, LinkUpdate, NewLink};
