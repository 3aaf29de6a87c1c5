pub mod folder;
pub mod health;
pub mod me;
pub mod note;
pub mod snippet;
pub mod trash;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Every route in here requires a Bearer identity token; the public
/// `/health` endpoint is mounted at the root, outside this tree.
///
/// Route hierarchy:
///
/// ```text
/// /me                           resolved identity
///
/// /folders                      list (?domain=), create
/// /folders/tree                 forest view (?domain=)
/// /folders/{id}                 get, update, delete
/// /folders/{id}/parent          re-parent (PUT)
/// /folders/{id}/breadcrumbs     root-to-folder trail
///
/// /notes                        list (?folder=), create
/// /notes/{id}                   get, update, delete (to trash)
/// /notes/{id}/folder            place (PUT)
///
/// /snippets                     list (?folder=), create
/// /snippets/{id}                get, update, delete (permanent)
/// /snippets/{id}/folder         place (PUT)
///
/// /trash                        list trashed notes
/// /trash/purge                  empty trash (DELETE)
/// /trash/{id}/restore           restore (POST)
/// /trash/{id}/purge             purge one (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Caller identity (lazily mirrored from the identity provider).
        .nest("/me", me::router())
        // Folder hierarchy per item domain.
        .nest("/folders", folder::router())
        // Notes: active set only; trashed notes live under /trash.
        .nest("/notes", note::router())
        // Snippets: no trash lifecycle.
        .nest("/snippets", snippet::router())
        // Trash: listing, restore, purge.
        .nest("/trash", trash::router())
}
