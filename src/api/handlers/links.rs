//! Handlers for link management endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkResponse, UpdateLinkRequest};
use crate::api::dto::pagination::RangeParams;
use crate::error::AppError;
use crate::state::AppState;

/// Lists links in a 1-based inclusive range.
///
/// # Endpoint
///
/// `GET /links?range=[from,to]`
///
/// # Query Parameters
///
/// - `range` - JSON pair of bounds, default `[1,10]`
///
/// # Response
///
/// JSON array of links with a `Content-Range: links {from}-{to}/{total}`
/// header. The header echoes the requested bounds.
///
/// # Errors
///
/// Returns 400 Bad Request if the range is malformed, non-positive or not
/// increasing.
pub async fn list_links_handler(
    State(state): State<AppState>,
    params: Result<Query<RangeParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let range = params.page_range();

    let page = state
        .link_service
        .list(&state.op_context(), range.from, range.to)
        .await?;

    let content_range = page.content_range();
    let links: Vec<LinkResponse> = page.links.into_iter().map(LinkResponse::from).collect();

    Ok(([(header::CONTENT_RANGE, content_range)], Json(links)))
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "short_name": "my-link"
/// }
/// ```
///
/// `short_name` is optional; when absent or empty one is generated.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is invalid.
/// Returns 409 Conflict if the short name is taken.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .create(&state.op_context(), payload.original_url, payload.short_name)
        .await?;

    Ok((StatusCode::CREATED, Json(LinkResponse::from(link))))
}

/// Returns a single link.
///
/// # Endpoint
///
/// `GET /links/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if the id is not an integer.
/// Returns 404 Not Found if the link does not exist.
pub async fn get_link_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Path(id) = path?;
    let link = state.link_service.get(&state.op_context(), id).await?;

    Ok(Json(LinkResponse::from(link)))
}

/// Replaces a link's original URL and short name.
///
/// # Endpoint
///
/// `PUT /links/{id}`
///
/// # Errors
///
/// Returns 400 Bad Request if either field is missing.
/// Returns 404 Not Found if the link does not exist.
/// Returns 409 Conflict if another link owns the short name.
pub async fn update_link_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateLinkRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .update(
            &state.op_context(),
            id,
            payload.original_url,
            payload.short_name,
        )
        .await?;

    Ok(Json(LinkResponse::from(link)))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the link does not exist.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.link_service.delete(&state.op_context(), id).await?;

    Ok(StatusCode::NO_CONTENT)
}
