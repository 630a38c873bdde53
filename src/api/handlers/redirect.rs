//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short name to its original URL with 307 Temporary Redirect.
///
/// # Endpoint
///
/// `GET /{short_name}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has this short name.
/// Returns 500 Internal Server Error if the stored URL is not a valid
/// `Location` header value.
pub async fn redirect_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(short_name) = path?;

    let link = state
        .link_service
        .resolve(&state.op_context(), &short_name)
        .await?;

    let location = HeaderValue::from_str(&link.original_url).map_err(|e| {
        error!(id = link.id, error = %e, "Stored URL is not a valid Location header");
        AppError::persistence(
            "Stored link target cannot be redirected to",
            json!({ "short_name": link.short_name }),
        )
    })?;

    debug!(short_name = %link.short_name, "Redirecting");

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
