//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL, counting the visit.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Accounting
///
/// The lookup and the click increment are a single atomic database
/// operation, so every served redirect is counted exactly once and
/// concurrent visitors never lose updates. If the caller disconnects after
/// the update but before the response, the count still stands; the counter
/// is approximate analytics, not an exactly-once effect.
///
/// # Errors
///
/// Returns 404 Not Found if the code has no live link (never created, or
/// deleted - including a delete racing this request).
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target_url = state.link_service.resolve_and_count(&code).await?;

    debug!("redirecting {} -> {}", code, target_url);

    Ok(Redirect::temporary(&target_url))
}
