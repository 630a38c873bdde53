//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::context::OpContext;
use crate::domain::entities::{Link, LinkUpdate, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::utils::db_error::classify;

/// PostgreSQL repository for link storage and retrieval.
///
/// Uses bound parameters throughout. Unique violations on
/// `links_short_name_key` surface as [`StoreError::UniqueViolation`].
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn count(&self, ctx: &OpContext) -> Result<i64, StoreError> {
        ctx.run(async {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
                .fetch_one(self.pool.as_ref())
                .await
                .map_err(classify)
        })
        .await
    }

    async fn find_all(
        &self,
        ctx: &OpContext,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Link>, StoreError> {
        ctx.run(async {
            sqlx::query_as::<_, Link>(
                r#"
                SELECT id, original_url, short_name, short_url
                FROM links
                ORDER BY id ASC
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(classify)
        })
        .await
    }

    async fn get(&self, ctx: &OpContext, id: i64) -> Result<Link, StoreError> {
        ctx.run(async {
            sqlx::query_as::<_, Link>(
                "SELECT id, original_url, short_name, short_url FROM links WHERE id = $1",
            )
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(classify)
        })
        .await
    }

    async fn find_by_short_name(
        &self,
        ctx: &OpContext,
        short_name: &str,
    ) -> Result<Link, StoreError> {
        ctx.run(async {
            sqlx::query_as::<_, Link>(
                "SELECT id, original_url, short_name, short_url FROM links WHERE short_name = $1",
            )
            .bind(short_name)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(classify)
        })
        .await
    }

    async fn create(&self, ctx: &OpContext, new_link: NewLink) -> Result<Link, StoreError> {
        ctx.run(async {
            sqlx::query_as::<_, Link>(
                r#"
                INSERT INTO links (original_url, short_name, short_url)
                VALUES ($1, $2, $3)
                RETURNING id, original_url, short_name, short_url
                "#,
            )
            .bind(&new_link.original_url)
            .bind(&new_link.short_name)
            .bind(&new_link.short_url)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(classify)
        })
        .await
    }

    async fn update(
        &self,
        ctx: &OpContext,
        id: i64,
        update: LinkUpdate,
    ) -> Result<Link, StoreError> {
        ctx.run(async {
            sqlx::query_as::<_, Link>(
                r#"
                UPDATE links
                SET original_url = $2, short_name = $3, short_url = $4
                WHERE id = $1
                RETURNING id, original_url, short_name, short_url
                "#,
            )
            .bind(id)
            .bind(&update.original_url)
            .bind(&update.short_name)
            .bind(&update.short_url)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(classify)
        })
        .await
    }

    async fn delete(&self, ctx: &OpContext, id: i64) -> Result<(), StoreError> {
        ctx.run(async {
            let result = sqlx::query("DELETE FROM links WHERE id = $1")
                .bind(id)
                .execute(self.pool.as_ref())
                .await
                .map_err(classify)?;

            if result.rows_affected() == 0 {
                return Err(StoreError::NotFound);
            }

            Ok(())
        })
        .await
    }
}
