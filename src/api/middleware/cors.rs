//! CORS policy for a browser frontend.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Allows `origin` to call the link API and read `Content-Range`.
///
/// # Errors
///
/// Returns an error if `origin` is not a valid header value.
pub fn layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_RANGE]))
}
