//! Handlers for the `/folders` resource.
//!
//! Folders are flat rows with a parent pointer; the tree and breadcrumb
//! endpoints assemble them per request from the owner's listing. Every
//! endpoint is scoped to the authenticated caller.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use notestash_core::domain::{validate_folder_name, ItemDomain, DOMAIN_NOTES};
use notestash_core::error::CoreError;
use notestash_core::hierarchy::{breadcrumb_trail, build_forest, ensure_no_cycle, TreeNode};
use notestash_core::types::DbId;
use notestash_db::models::folder::{CreateFolder, Folder, UpdateFolder};
use notestash_db::repositories::{FolderRepo, NoteRepo, SnippetRepo};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::handlers::placement::check_target;
use crate::identity::CurrentUser;
use crate::state::AppState;

/// Query parameters for the folder listing endpoints.
#[derive(Debug, Deserialize)]
pub struct DomainQuery {
    /// Which item domain to list folders for ("notes" or "snippets").
    pub domain: Option<String>,
}

/// POST /api/v1/folders
///
/// The parent, when given, must already pass the same checks a placement
/// target does: it exists, holds the same kind, and belongs to the caller.
pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(input): Json<CreateFolder>,
) -> AppResult<(StatusCode, Json<Folder>)> {
    let owner_id = current.user.id;
    validate_folder_name(&input.name)?;
    ItemDomain::from_str(&input.kind)?;
    check_target(&state.pool, owner_id, input.parent_id, &input.kind).await?;

    let folder = FolderRepo::create(&state.pool, owner_id, &input).await?;
    Ok((StatusCode::CREATED, Json(folder)))
}

/// GET /api/v1/folders?domain=notes|snippets
pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(params): Query<DomainQuery>,
) -> AppResult<Json<Vec<Folder>>> {
    let domain = require_domain(&params)?;
    let folders = FolderRepo::list(&state.pool, current.user.id, domain.as_str()).await?;
    Ok(Json(folders))
}

/// GET /api/v1/folders/tree?domain=notes|snippets
///
/// The owner's folders of one domain, assembled into a forest. Rows whose
/// parent pointer dangles or cycles still appear, re-rooted at the top.
pub async fn tree(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(params): Query<DomainQuery>,
) -> AppResult<Json<Vec<TreeNode<Folder>>>> {
    let domain = require_domain(&params)?;
    let folders = FolderRepo::list(&state.pool, current.user.id, domain.as_str()).await?;
    Ok(Json(build_forest(folders)))
}

/// GET /api/v1/folders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Folder>> {
    let folder = find_owned(&state.pool, current.user.id, id).await?;
    Ok(Json(folder))
}

/// GET /api/v1/folders/{id}/breadcrumbs
///
/// The trail from the root ancestor down to the folder itself. A cycle in
/// the persisted parent graph surfaces as 409 rather than a hang.
pub async fn breadcrumbs(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Folder>>> {
    let owner_id = current.user.id;
    let folder = find_owned(&state.pool, owner_id, id).await?;
    let folders = FolderRepo::list(&state.pool, owner_id, &folder.kind).await?;
    let trail = breadcrumb_trail(&folders, id)?;
    Ok(Json(trail.into_iter().cloned().collect()))
}

/// PUT /api/v1/folders/{id}
pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFolder>,
) -> AppResult<Json<Folder>> {
    if let Some(ref name) = input.name {
        validate_folder_name(name)?;
    }
    let folder = FolderRepo::update(&state.pool, current.user.id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "folder",
            id,
        }))?;
    Ok(Json(folder))
}

/// Body of `PUT /api/v1/folders/{id}/parent`.
#[derive(Debug, Deserialize)]
pub struct SetParentRequest {
    /// The new parent, or null to move the folder to the root.
    pub parent_id: Option<DbId>,
}

/// PUT /api/v1/folders/{id}/parent
///
/// Moving to the root always succeeds. Moving under a parent runs the
/// placement checks on the parent and then the cycle guard, so a folder can
/// never become its own ancestor.
pub async fn set_parent(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
    Json(input): Json<SetParentRequest>,
) -> AppResult<Json<Folder>> {
    let owner_id = current.user.id;
    let folder = find_owned(&state.pool, owner_id, id).await?;

    if let Some(parent_id) = input.parent_id {
        check_target(&state.pool, owner_id, Some(parent_id), &folder.kind).await?;
        let folders = FolderRepo::list(&state.pool, owner_id, &folder.kind).await?;
        ensure_no_cycle(&folders, id, parent_id)?;
    }

    let moved = FolderRepo::set_parent(&state.pool, owner_id, id, input.parent_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "folder",
            id,
        }))?;
    Ok(Json(moved))
}

/// DELETE /api/v1/folders/{id}
///
/// Hard delete, refused with 409 while the folder still holds child folders
/// or items. Trashed notes never block: deletion clears their `folder_id`,
/// so a later restore lands in the unfiled root.
pub async fn delete(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let owner_id = current.user.id;
    let folder = find_owned(&state.pool, owner_id, id).await?;

    let children = FolderRepo::count_children(&state.pool, id).await?;
    if children > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Folder {id} still contains {children} child folder(s)"
        ))));
    }
    let items = if folder.kind == DOMAIN_NOTES {
        NoteRepo::count_active_in_folder(&state.pool, id).await?
    } else {
        SnippetRepo::count_in_folder(&state.pool, id).await?
    };
    if items > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Folder {id} still contains {items} item(s)"
        ))));
    }

    let deleted = FolderRepo::delete(&state.pool, owner_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "folder",
            id,
        }))
    }
}

// ── Private helpers ──────────────────────────────────────────────────────

/// Parse the required `?domain=` query parameter.
fn require_domain(params: &DomainQuery) -> AppResult<ItemDomain> {
    match params.domain.as_deref() {
        Some(raw) => Ok(ItemDomain::from_str(raw)?),
        None => Err(AppError::BadRequest(
            "Missing required query parameter: domain".to_string(),
        )),
    }
}

/// Fetch a folder owned by the caller, or fail with `NotFound`.
async fn find_owned(pool: &PgPool, owner_id: DbId, id: DbId) -> AppResult<Folder> {
    FolderRepo::find_by_id(pool, owner_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "folder",
            id,
        }))
}
