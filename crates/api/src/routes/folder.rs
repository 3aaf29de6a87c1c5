//! Route definitions for the `/folders` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::folder;
use crate::state::AppState;

/// Routes mounted at `/folders`.
///
/// ```text
/// GET    /                      -> list        (?domain=notes|snippets)
/// POST   /                      -> create
/// GET    /tree                  -> tree        (?domain=notes|snippets)
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// PUT    /{id}/parent           -> set_parent
/// GET    /{id}/breadcrumbs      -> breadcrumbs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(folder::list).post(folder::create))
        .route("/tree", get(folder::tree))
        .route(
            "/{id}",
            get(folder::get_by_id)
                .put(folder::update)
                .delete(folder::delete),
        )
        .route("/{id}/parent", put(folder::set_parent))
        .route("/{id}/breadcrumbs", get(folder::breadcrumbs))
}
