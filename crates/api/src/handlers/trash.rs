//! Handlers for the `/trash` resource.
//!
//! The trash holds soft-deleted notes. Listing projects each note with the
//! whole days left in its retention window, restore and purge move notes
//! out of the trash, and empty-trash purges everything the caller has
//! trashed, reporting per-item outcomes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use notestash_core::error::CoreError;
use notestash_core::retention::{days_remaining, purge_each, EmptyTrashReport};
use notestash_core::types::{DbId, Timestamp};
use notestash_db::models::note::Note;
use notestash_db::repositories::NoteRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::identity::CurrentUser;
use crate::state::AppState;

/// One trashed note as shown in the trash listing.
#[derive(Debug, Serialize)]
pub struct TrashItemView {
    pub id: DbId,
    pub title: String,
    pub kind: String,
    pub folder_id: Option<DbId>,
    pub deleted_at: Timestamp,
    /// Whole days left in the retention window, recomputed per listing.
    pub days_remaining: i64,
}

/// Listing returned by `GET /api/v1/trash`.
#[derive(Debug, Serialize)]
pub struct TrashListing {
    pub items: Vec<TrashItemView>,
    pub total_count: i64,
}

/// Response of `DELETE /api/v1/trash/purge`.
#[derive(Debug, Serialize)]
pub struct EmptyTrashResponse {
    /// True when every trashed note was purged.
    pub success: bool,
    #[serde(flatten)]
    pub report: EmptyTrashReport,
}

/// GET /api/v1/trash
///
/// The caller's trashed notes, most recently deleted first.
pub async fn list_trashed(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<TrashListing>> {
    let rows = NoteRepo::list_trashed(&state.pool, current.user.id).await?;
    let now = Utc::now();
    let items: Vec<TrashItemView> = rows
        .into_iter()
        .map(|note| TrashItemView {
            id: note.id,
            title: note.title,
            kind: note.kind,
            folder_id: note.folder_id,
            deleted_at: note.deleted_at,
            days_remaining: days_remaining(note.deleted_at, now),
        })
        .collect();
    let total_count = items.len() as i64;
    Ok(Json(TrashListing { items, total_count }))
}

/// POST /api/v1/trash/{id}/restore
///
/// Restores a trashed note. Restoring a note that is already active is a
/// no-op success returning the unchanged note, so two racing restores
/// observe the same outcome.
pub async fn restore(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Note>> {
    let owner_id = current.user.id;
    if let Some(note) = NoteRepo::restore(&state.pool, owner_id, id).await? {
        return Ok(Json(note));
    }
    // The compare-and-set missed: the note is either already active or
    // does not exist for this caller.
    match NoteRepo::find_by_id(&state.pool, owner_id, id).await? {
        Some(note) => Ok(Json(note)),
        None => Err(AppError::Core(CoreError::NotFound { entity: "note", id })),
    }
}

/// DELETE /api/v1/trash/purge
///
/// Purges every trashed note of the caller as independent operations; one
/// failure never aborts the rest. Failed notes stay in the trash and are
/// reported alongside the purged ids.
pub async fn empty_trash(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<EmptyTrashResponse>> {
    let owner_id = current.user.id;
    let ids = NoteRepo::trashed_ids(&state.pool, owner_id).await?;

    let pool = &state.pool;
    let report = purge_each(ids, |id| async move {
        NoteRepo::purge(pool, owner_id, id).await.map(|_| ())
    })
    .await;

    let success = report.all_purged();
    Ok(Json(EmptyTrashResponse { success, report }))
}

/// DELETE /api/v1/trash/{id}/purge
///
/// Permanently deletes the note from either state: purging from the trash
/// and "delete forever" on an active note are the same operation.
pub async fn purge_one(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NoteRepo::purge(&state.pool, current.user.id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "note", id }))
    }
}
