//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/links*`            - Link management API
//! - `GET /{short_name}`  - Short link redirect
//! - `GET /health`        - Health check (storage)
//! - `GET /ping`          - Liveness probe
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Only when a frontend origin is configured
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, ping_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and layers, without path normalization.
///
/// # Errors
///
/// Returns an error if `frontend_url` is not a valid origin header.
pub fn router(state: AppState, frontend_url: Option<&str>) -> anyhow::Result<Router> {
    let router = Router::new()
        .merge(api::routes::link_routes())
        .route("/health", get(health_handler))
        .route("/ping", get(ping_handler))
        .route("/{short_name}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    let router = match frontend_url {
        Some(origin) => router.layer(cors::layer(origin)?),
        None => router,
    };

    Ok(router)
}

/// Constructs the application service with trailing slashes trimmed.
///
/// # Errors
///
/// Returns an error if `frontend_url` is not a valid origin header.
pub fn app_router(state: AppState, frontend_url: Option<&str>) -> anyhow::Result<NormalizePath<Router>> {
    let router = router(state, frontend_url)?;

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
