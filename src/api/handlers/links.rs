//! Handlers for link management endpoints (create, list, stats, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "target_url": "https://example.com",
///   "code": "promo24"   // optional, [A-Za-z0-9]{6,8}
/// }
/// ```
///
/// # Responses
///
/// - **201 Created** with `{code, target_url, short_url}`
/// - **400 Bad Request** for an invalid target URL or code
/// - **409 Conflict** when the requested code is taken
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.target_url, payload.code)
        .await?;

    let short_url = state.short_url(&link.code);

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse {
            code: link.code,
            target_url: link.target_url,
            short_url,
        }),
    ))
}

/// Lists all links with their click accounting, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.stats_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns statistics for one link without counting a visit.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found when the code has no live link.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.stats_service.get_stats(&code).await?;

    Ok(Json(LinkResponse::from(link)))
}

/// Deletes a link, making the code immediately reusable and subsequent
/// redirects resolve as not-found.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Responses
///
/// - **204 No Content** on success
/// - **404 Not Found** when the code has no live link
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
