//! Link orchestration service.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{error, info, warn};

use crate::domain::context::OpContext;
use crate::domain::entities::{Link, LinkUpdate, NewLink};
use crate::domain::pagination::PageRange;
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::error::AppError;
use crate::utils::code_generator::{RandomShortCode, ShortCodeGenerator, validate_short_name};

/// Default number of persistence attempts for a generated short name.
pub const DEFAULT_MAX_CREATE_ATTEMPTS: usize = 10;

/// One page of links plus the total used for the `Content-Range` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPage {
    pub links: Vec<Link>,
    pub from: i64,
    pub to: i64,
    pub total: i64,
}

impl LinkPage {
    /// Formats `links {from}-{to}/{total}`.
    pub fn content_range(&self) -> String {
        format!("links {}-{}/{}", self.from, self.to, self.total)
    }
}

/// Service for creating, resolving and managing short links.
///
/// Validates input before any store call, derives `short_url` from the
/// configured base path, retries generated names on collision and
/// reclassifies every [`StoreError`] into an [`AppError`].
pub struct LinkService<L: LinkRepository + ?Sized> {
    repository: Arc<L>,
    generator: Arc<dyn ShortCodeGenerator>,
    base_path: String,
    max_create_attempts: usize,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    ///
    /// A trailing `/` on `base_path` is dropped so that short URLs always
    /// have exactly one separator.
    pub fn new(repository: Arc<L>, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into().trim_end_matches('/').to_string();

        Self {
            repository,
            generator: Arc::new(RandomShortCode),
            base_path,
            max_create_attempts: DEFAULT_MAX_CREATE_ATTEMPTS,
        }
    }

    /// Replaces the short name generator.
    pub fn with_generator(mut self, generator: Arc<dyn ShortCodeGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Sets the total number of attempts for generated names (at least 1).
    pub fn with_max_create_attempts(mut self, attempts: usize) -> Self {
        self.max_create_attempts = attempts.max(1);
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Derives the public short URL for a short name.
    pub fn short_url_for(&self, short_name: &str) -> String {
        format!("{}/{}", self.base_path, short_name)
    }

    /// Returns the total number of links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage failures.
    pub async fn count(&self, ctx: &OpContext) -> Result<i64, AppError> {
        self.repository
            .count(ctx)
            .await
            .map_err(|e| translate("count", e, json!({})))
    }

    /// Lists links in the 1-based inclusive range `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the range is invalid; the store is
    /// not called in that case.
    /// Returns [`AppError::Persistence`] on storage failures.
    pub async fn list(&self, ctx: &OpContext, from: i64, to: i64) -> Result<LinkPage, AppError> {
        let window = PageRange::new(from, to).resolve()?;

        let links = self
            .repository
            .find_all(ctx, window.limit, window.offset)
            .await
            .map_err(|e| translate("list", e, json!({ "from": from, "to": to })))?;

        let total = self.count(ctx).await?;

        Ok(LinkPage {
            links,
            from,
            to,
            total,
        })
    }

    /// Fetches a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link does not exist.
    /// Returns [`AppError::Persistence`] on storage failures.
    pub async fn get(&self, ctx: &OpContext, id: i64) -> Result<Link, AppError> {
        self.repository
            .get(ctx, id)
            .await
            .map_err(|e| translate("get", e, json!({ "id": id })))
    }

    /// Looks a link up by short name, for redirects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this short name.
    pub async fn resolve(&self, ctx: &OpContext, short_name: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_short_name(ctx, short_name)
            .await
            .map_err(|e| translate("resolve", e, json!({ "short_name": short_name })))
    }

    /// Creates a short link.
    ///
    /// # Short names
    ///
    /// - An explicit `short_name` is validated and persisted once; if it is
    ///   already taken the call fails with [`AppError::Conflict`].
    /// - A missing or empty `short_name` is generated. On collision a fresh
    ///   name is generated and persistence retried, up to the configured
    ///   number of attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `original_url` is blank or holds a
    /// control character, or the explicit short name is invalid.
    /// Returns [`AppError::Conflict`] on an explicit-name collision or when
    /// generation runs out of attempts.
    /// Returns [`AppError::Cancelled`] if the context fires, including between
    /// retries.
    pub async fn create(
        &self,
        ctx: &OpContext,
        original_url: String,
        short_name: Option<String>,
    ) -> Result<Link, AppError> {
        let original_url = require_original_url(original_url)?;

        let link = match short_name.filter(|name| !name.is_empty()) {
            Some(name) => self.create_with_name(ctx, original_url, name).await?,
            None => self.create_with_generated_name(ctx, original_url).await?,
        };

        metrics::counter!("links_created_total").increment(1);
        info!(id = link.id, short_name = %link.short_name, "Link created");

        Ok(link)
    }

    /// Replaces a link's original URL and short name.
    ///
    /// Both fields are required; `short_url` is recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either field is empty or invalid.
    /// Returns [`AppError::NotFound`] if the link does not exist.
    /// Returns [`AppError::Conflict`] if another link owns the short name.
    pub async fn update(
        &self,
        ctx: &OpContext,
        id: i64,
        original_url: String,
        short_name: String,
    ) -> Result<Link, AppError> {
        let original_url = require_original_url(original_url)?;

        if short_name.is_empty() {
            return Err(AppError::bad_request(
                "Short name is required",
                json!({ "field": "short_name" }),
            ));
        }
        validate_short_name(&short_name)?;

        let update = LinkUpdate {
            original_url,
            short_url: self.short_url_for(&short_name),
            short_name,
        };

        let link = self
            .repository
            .update(ctx, id, update)
            .await
            .map_err(|e| translate("update", e, json!({ "id": id })))?;

        info!(id = link.id, short_name = %link.short_name, "Link updated");

        Ok(link)
    }

    /// Deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link does not exist.
    pub async fn delete(&self, ctx: &OpContext, id: i64) -> Result<(), AppError> {
        self.repository
            .delete(ctx, id)
            .await
            .map_err(|e| translate("delete", e, json!({ "id": id })))?;

        info!(id, "Link deleted");

        Ok(())
    }

    async fn create_with_name(
        &self,
        ctx: &OpContext,
        original_url: String,
        short_name: String,
    ) -> Result<Link, AppError> {
        validate_short_name(&short_name)?;

        let details = json!({ "short_name": short_name });
        let new_link = NewLink {
            original_url,
            short_url: self.short_url_for(&short_name),
            short_name,
        };

        self.repository
            .create(ctx, new_link)
            .await
            .map_err(|e| translate("create", e, details))
    }

    /// Persists a generated name, regenerating on collision.
    ///
    /// Only [`StoreError::UniqueViolation`] is retried, and never once the
    /// context has fired.
    async fn create_with_generated_name(
        &self,
        ctx: &OpContext,
        original_url: String,
    ) -> Result<Link, AppError> {
        let strategy = ExponentialBackoff::from_millis(2)
            .max_delay(Duration::from_millis(50))
            .map(jitter)
            .take(self.max_create_attempts - 1);

        let action = || {
            let short_name = self.generator.generate();
            let new_link = NewLink {
                original_url: original_url.clone(),
                short_url: self.short_url_for(&short_name),
                short_name,
            };

            async move {
                if ctx.is_cancelled() {
                    return Err(StoreError::Cancelled);
                }
                self.repository.create(ctx, new_link).await
            }
        };

        let should_retry = |err: &StoreError| {
            if *err != StoreError::UniqueViolation {
                return false;
            }
            metrics::counter!("short_name_collisions_total").increment(1);
            if ctx.is_cancelled() {
                return false;
            }
            warn!("Generated short name collided, regenerating");
            true
        };

        match RetryIf::start(strategy, action, should_retry).await {
            Ok(link) => Ok(link),
            Err(_) if ctx.is_cancelled() => Err(cancelled("create")),
            Err(StoreError::UniqueViolation) => {
                metrics::counter!("short_name_exhausted_total").increment(1);
                warn!(
                    attempts = self.max_create_attempts,
                    "Failed to generate a unique short name"
                );
                Err(AppError::conflict(
                    "Failed to generate a unique short name",
                    json!({ "attempts": self.max_create_attempts }),
                ))
            }
            Err(e) => Err(translate("create", e, json!({}))),
        }
    }
}

/// Rejects blank URLs and URLs that cannot be sent as a `Location` header.
/// The value is persisted as given.
fn require_original_url(original_url: String) -> Result<String, AppError> {
    if original_url.trim().is_empty() {
        return Err(AppError::bad_request(
            "Original URL is required",
            json!({ "field": "original_url" }),
        ));
    }

    if original_url.chars().any(char::is_control) {
        return Err(AppError::bad_request(
            "Original URL contains control characters",
            json!({ "field": "original_url" }),
        ));
    }

    Ok(original_url)
}

fn cancelled(operation: &'static str) -> AppError {
    AppError::cancelled("Operation cancelled", json!({ "operation": operation }))
}

/// Reclassifies a storage outcome. Store-internal messages are logged, never
/// returned.
fn translate(operation: &'static str, err: StoreError, details: Value) -> AppError {
    match err {
        StoreError::NotFound => AppError::not_found("Link not found", details),
        StoreError::UniqueViolation => AppError::conflict("Short name already exists", details),
        StoreError::Cancelled => cancelled(operation),
        StoreError::Unknown(reason) => {
            error!(operation, error = %reason, "Storage operation failed");
            AppError::persistence(
                "Storage operation failed",
                json!({ "operation": operation }),
            )
        }
    }
}
