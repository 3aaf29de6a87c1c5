//! Handlers for the `/notes` resource.
//!
//! These endpoints only ever see active notes; a trashed note is invisible
//! here and resolves as 404 until it is restored through the trash API.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use notestash_core::domain::{validate_list_items, NoteKind, DOMAIN_NOTES};
use notestash_core::error::CoreError;
use notestash_core::types::DbId;
use notestash_db::models::folder::Folder;
use notestash_db::models::note::{CreateNote, Note, UpdateNote};
use notestash_db::repositories::NoteRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::placement::{
    check_new_folder, check_target, parse_folder_scope, FolderQuery, PlaceItemRequest,
};
use crate::identity::CurrentUser;
use crate::state::AppState;

/// Response of `PUT /api/v1/notes/{id}/folder`.
#[derive(Debug, Serialize)]
pub struct PlacedNote {
    pub note: Note,
    /// The folder created inline, when the request asked for one.
    pub created_folder: Option<Folder>,
}

/// POST /api/v1/notes
pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(input): Json<CreateNote>,
) -> AppResult<(StatusCode, Json<Note>)> {
    let owner_id = current.user.id;
    if let Some(ref kind) = input.kind {
        NoteKind::from_str(kind)?;
    }
    if let Some(ref items) = input.list_items {
        validate_list_items(items)?;
    }
    check_target(&state.pool, owner_id, input.folder_id, DOMAIN_NOTES).await?;

    let note = NoteRepo::create(&state.pool, owner_id, &input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /api/v1/notes?folder=all|unfiled|{id}
pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(params): Query<FolderQuery>,
) -> AppResult<Json<Vec<Note>>> {
    let scope = parse_folder_scope(params.folder.as_deref())?;
    let notes = NoteRepo::list_active(&state.pool, current.user.id, scope).await?;
    Ok(Json(notes))
}

/// GET /api/v1/notes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Note>> {
    let note = NoteRepo::find_by_id(&state.pool, current.user.id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "note", id }))?;
    Ok(Json(note))
}

/// PUT /api/v1/notes/{id}
pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNote>,
) -> AppResult<Json<Note>> {
    if let Some(ref kind) = input.kind {
        NoteKind::from_str(kind)?;
    }
    if let Some(ref items) = input.list_items {
        validate_list_items(items)?;
    }
    let note = NoteRepo::update(&state.pool, current.user.id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "note", id }))?;
    Ok(Json(note))
}

/// PUT /api/v1/notes/{id}/folder
///
/// Places the note into an existing folder (or the unfiled root), or
/// creates a folder around it in one transaction when the body carries
/// `new_folder`. The target is validated before anything is written.
pub async fn place(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
    Json(input): Json<PlaceItemRequest>,
) -> AppResult<Json<PlacedNote>> {
    let owner_id = current.user.id;
    input.ensure_single_destination()?;

    if let Some(spec) = input.new_folder {
        let folder_input = check_new_folder(&state.pool, owner_id, DOMAIN_NOTES, spec).await?;
        let (folder, note) =
            NoteRepo::place_into_new_folder(&state.pool, owner_id, id, &folder_input)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound { entity: "note", id }))?;
        return Ok(Json(PlacedNote {
            note,
            created_folder: Some(folder),
        }));
    }

    check_target(&state.pool, owner_id, input.folder_id, DOMAIN_NOTES).await?;
    let note = NoteRepo::set_folder(&state.pool, owner_id, id, input.folder_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "note", id }))?;
    Ok(Json(PlacedNote {
        note,
        created_folder: None,
    }))
}

/// DELETE /api/v1/notes/{id}
///
/// Moves the note to the trash. Deleting a note that is already trashed is
/// a no-op success, so two racing deletes observe the same outcome.
pub async fn delete(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let owner_id = current.user.id;
    if NoteRepo::move_to_trash(&state.pool, owner_id, id)
        .await?
        .is_some()
    {
        return Ok(StatusCode::NO_CONTENT);
    }
    // The compare-and-set missed: the note is either already in the trash
    // or does not exist for this caller.
    match NoteRepo::find_by_id_include_deleted(&state.pool, owner_id, id).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::Core(CoreError::NotFound { entity: "note", id })),
    }
}
