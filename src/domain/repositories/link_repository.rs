//! Repository trait for short link data access.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::context::OpContext;
use crate::domain::entities::{Link, LinkUpdate, NewLink};

/// Storage outcome taxonomy.
///
/// The service decides between retry, conflict and not-found by matching on
/// these variants, so implementations must report them reliably.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("row not found")]
    NotFound,

    /// Unique constraint on `short_name` was violated.
    #[error("short name already exists")]
    UniqueViolation,

    #[error("operation cancelled")]
    Cancelled,

    #[error("storage failure: {0}")]
    Unknown(String),
}

/// Repository interface for managing short links.
///
/// Every method takes the caller's [`OpContext`] and must stop with
/// [`StoreError::Cancelled`] once it fires.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Counts all links.
    async fn count(&self, ctx: &OpContext) -> Result<i64, StoreError>;

    /// Lists links ordered by id.
    ///
    /// # Arguments
    ///
    /// - `limit` - Maximum number of rows
    /// - `offset` - Number of rows to skip
    async fn find_all(
        &self,
        ctx: &OpContext,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Link>, StoreError>;

    /// Fetches a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no row has this id.
    async fn get(&self, ctx: &OpContext, id: i64) -> Result<Link, StoreError>;

    /// Fetches a link by its short name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no row has this short name.
    async fn find_by_short_name(&self, ctx: &OpContext, short_name: &str)
    -> Result<Link, StoreError>;

    /// Inserts a link and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if the short name is taken.
    async fn create(&self, ctx: &OpContext, new_link: NewLink) -> Result<Link, StoreError>;

    /// Replaces all mutable fields of a link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no row has this id.
    /// Returns [`StoreError::UniqueViolation`] if another link owns the short name.
    async fn update(
        &self,
        ctx: &OpContext,
        id: i64,
        update: LinkUpdate,
    ) -> Result<Link, StoreError>;

    /// Removes a link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no row was deleted.
    async fn delete(&self, ctx: &OpContext, id: i64) -> Result<(), StoreError>;
}
