//! Process-local implementation of link repository.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::context::OpContext;
use crate::domain::entities::{Link, LinkUpdate, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    links: BTreeMap<i64, Link>,
    by_short_name: HashMap<String, i64>,
}

/// In-memory link store with the same outcome taxonomy as PostgreSQL.
///
/// Ids start at 1 and are never reused. The short name index is checked and
/// written under one write lock, so concurrent creates cannot both win the
/// same name.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    inner: RwLock<Inner>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_usize(value: i64) -> Result<usize, StoreError> {
    usize::try_from(value).map_err(|_| StoreError::Unknown(format!("invalid window value {}", value)))
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn count(&self, ctx: &OpContext) -> Result<i64, StoreError> {
        ctx.run(async {
            let inner = self.inner.read().await;
            Ok(inner.links.len() as i64)
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
            let limit = to_usize(limit)?;
            let offset = to_usize(offset)?;

            let inner = self.inner.read().await;
            Ok(inner
                .links
                .values()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect())
        })
        .await
    }

    async fn get(&self, ctx: &OpContext, id: i64) -> Result<Link, StoreError> {
        ctx.run(async {
            let inner = self.inner.read().await;
            inner.links.get(&id).cloned().ok_or(StoreError::NotFound)
        })
        .await
    }

    async fn find_by_short_name(
        &self,
        ctx: &OpContext,
        short_name: &str,
    ) -> Result<Link, StoreError> {
        ctx.run(async {
            let inner = self.inner.read().await;
            inner
                .by_short_name
                .get(short_name)
                .and_then(|id| inner.links.get(id))
                .cloned()
                .ok_or(StoreError::NotFound)
        })
        .await
    }

    async fn create(&self, ctx: &OpContext, new_link: NewLink) -> Result<Link, StoreError> {
        ctx.run(async {
            let mut inner = self.inner.write().await;

            if inner.by_short_name.contains_key(&new_link.short_name) {
                return Err(StoreError::UniqueViolation);
            }

            inner.next_id += 1;
            let id = inner.next_id;
            let link = Link::new(
                id,
                new_link.original_url,
                new_link.short_name,
                new_link.short_url,
            );

            inner.by_short_name.insert(link.short_name.clone(), id);
            inner.links.insert(id, link.clone());

            Ok(link)
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
            let mut inner = self.inner.write().await;

            let Some(current) = inner.links.get(&id) else {
                return Err(StoreError::NotFound);
            };
            let old_name = current.short_name.clone();

            if let Some(&owner) = inner.by_short_name.get(&update.short_name) {
                if owner != id {
                    return Err(StoreError::UniqueViolation);
                }
            }

            let link = Link::new(id, update.original_url, update.short_name, update.short_url);

            inner.by_short_name.remove(&old_name);
            inner.by_short_name.insert(link.short_name.clone(), id);
            inner.links.insert(id, link.clone());

            Ok(link)
        })
        .await
    }

    async fn delete(&self, ctx: &OpContext, id: i64) -> Result<(), StoreError> {
        ctx.run(async {
            let mut inner = self.inner.write().await;

            let link = inner.links.remove(&id).ok_or(StoreError::NotFound)?;
            inner.by_short_name.remove(&link.short_name);

            Ok(())
        })
        .await
    }
}
