//! Route definitions for the `/snippets` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::snippet;
use crate::state::AppState;

/// Routes mounted at `/snippets`.
///
/// ```text
/// GET    /                -> list    (?folder=all|unfiled|{id})
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete  (permanent)
/// PUT    /{id}/folder     -> place
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(snippet::list).post(snippet::create))
        .route(
            "/{id}",
            get(snippet::get_by_id)
                .put(snippet::update)
                .delete(snippet::delete),
        )
        .route("/{id}/folder", put(snippet::place))
}
