//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, list_links_handler, stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link management routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /links`         - Create a short link (optional custom code)
/// - `GET    /links`         - List all links with click accounting
/// - `GET    /links/{code}`  - Statistics for one link (never counts a visit)
/// - `DELETE /links/{code}`  - Delete a link, freeing its code
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler).get(list_links_handler))
        .route(
            "/links/{code}",
            get(stats_handler).delete(delete_link_handler),
        )
}
