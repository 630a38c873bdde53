//! PostgreSQL repository tests. Each test gets a fresh database with
//! `migrations/` applied; run with `DATABASE_URL` set and `--ignored`.

use sqlx::PgPool;
use std::sync::Arc;
use shortlinks::domain::context::OpContext;
use shortlinks::domain::entities::{LinkUpdate, NewLink};
use shortlinks::domain::repositories::{LinkRepository, StoreError};
use shortlinks::infrastructure::persistence::PgLinkRepository;

fn new_link(short_name: &str) -> NewLink {
    NewLink {
        original_url: format!("https://example.com/{}", short_name),
        short_name: short_name.to_string(),
        short_url: format!("https://sho.rt/{}", short_name),
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_and_get(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let ctx = OpContext::new();

    let created = repo.create(&ctx, new_link("abc")).await.unwrap();
    let fetched = repo.get(&ctx, created.id).await.unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.short_url, "https://sho.rt/abc");
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_duplicate_short_name_is_unique_violation(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let ctx = OpContext::new();

    repo.create(&ctx, new_link("dup")).await.unwrap();
    let result = repo.create(&ctx, new_link("dup")).await;

    assert_eq!(result.unwrap_err(), StoreError::UniqueViolation);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_get_missing_is_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.get(&OpContext::new(), 12345).await;

    assert_eq!(result.unwrap_err(), StoreError::NotFound);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_find_all_orders_by_id(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let ctx = OpContext::new();

    for i in 1..=5 {
        repo.create(&ctx, new_link(&format!("n{}", i))).await.unwrap();
    }

    let page = repo.find_all(&ctx, 2, 2).await.unwrap();
    let names: Vec<&str> = page.iter().map(|l| l.short_name.as_str()).collect();

    assert_eq!(names, vec!["n3", "n4"]);
    assert_eq!(repo.count(&ctx).await.unwrap(), 5);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_find_by_short_name(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let ctx = OpContext::new();

    let created = repo.create(&ctx, new_link("lookup")).await.unwrap();

    assert_eq!(
        repo.find_by_short_name(&ctx, "lookup").await.unwrap().id,
        created.id
    );
    assert_eq!(
        repo.find_by_short_name(&ctx, "missing").await.unwrap_err(),
        StoreError::NotFound
    );
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_update(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let ctx = OpContext::new();

    let link = repo.create(&ctx, new_link("before")).await.unwrap();
    repo.create(&ctx, new_link("taken")).await.unwrap();

    let updated = repo
        .update(
            &ctx,
            link.id,
            LinkUpdate {
                original_url: "https://new.com".to_string(),
                short_name: "after".to_string(),
                short_url: "https://sho.rt/after".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.short_name, "after");

    let conflict = repo
        .update(
            &ctx,
            link.id,
            LinkUpdate {
                original_url: "https://new.com".to_string(),
                short_name: "taken".to_string(),
                short_url: "https://sho.rt/taken".to_string(),
            },
        )
        .await;
    assert_eq!(conflict.unwrap_err(), StoreError::UniqueViolation);

    let missing = repo
        .update(
            &ctx,
            9999,
            LinkUpdate {
                original_url: "x".to_string(),
                short_name: "y".to_string(),
                short_url: "https://sho.rt/y".to_string(),
            },
        )
        .await;
    assert_eq!(missing.unwrap_err(), StoreError::NotFound);
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_delete(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let ctx = OpContext::new();

    let link = repo.create(&ctx, new_link("gone")).await.unwrap();

    repo.delete(&ctx, link.id).await.unwrap();

    assert_eq!(
        repo.delete(&ctx, link.id).await.unwrap_err(),
        StoreError::NotFound
    );
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_cancelled_context(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let ctx = OpContext::new();
    ctx.cancel();

    let result = repo.count(&ctx).await;

    assert_eq!(result.unwrap_err(), StoreError::Cancelled);
}
