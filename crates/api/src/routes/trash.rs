//! Route definitions for the `/trash` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::trash;
use crate::state::AppState;

/// Routes mounted at `/trash`.
///
/// ```text
/// GET    /                  -> list_trashed
/// DELETE /purge             -> empty_trash
/// POST   /{id}/restore      -> restore
/// DELETE /{id}/purge        -> purge_one
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trash::list_trashed))
        .route("/purge", delete(trash::empty_trash))
        .route("/{id}/restore", post(trash::restore))
        .route("/{id}/purge", delete(trash::purge_one))
}
