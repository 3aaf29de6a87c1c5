//! Handlers for the `/snippets` resource.
//!
//! Snippets share the placement plumbing with notes but have no trash
//! lifecycle: delete removes the row outright.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use notestash_core::domain::{validate_tabs, SnippetKind, DOMAIN_SNIPPETS};
use notestash_core::error::CoreError;
use notestash_core::types::DbId;
use notestash_db::models::folder::Folder;
use notestash_db::models::snippet::{CreateSnippet, Snippet, UpdateSnippet};
use notestash_db::repositories::SnippetRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::placement::{
    check_new_folder, check_target, parse_folder_scope, FolderQuery, PlaceItemRequest,
};
use crate::identity::CurrentUser;
use crate::state::AppState;

/// Response of `PUT /api/v1/snippets/{id}/folder`.
#[derive(Debug, Serialize)]
pub struct PlacedSnippet {
    pub snippet: Snippet,
    /// The folder created inline, when the request asked for one.
    pub created_folder: Option<Folder>,
}

/// POST /api/v1/snippets
pub async fn create(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(input): Json<CreateSnippet>,
) -> AppResult<(StatusCode, Json<Snippet>)> {
    let owner_id = current.user.id;
    if let Some(ref kind) = input.kind {
        SnippetKind::from_str(kind)?;
    }
    if let Some(ref tabs) = input.tabs {
        validate_tabs(tabs)?;
    }
    check_target(&state.pool, owner_id, input.folder_id, DOMAIN_SNIPPETS).await?;

    let snippet = SnippetRepo::create(&state.pool, owner_id, &input).await?;
    Ok((StatusCode::CREATED, Json(snippet)))
}

/// GET /api/v1/snippets?folder=all|unfiled|{id}
pub async fn list(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(params): Query<FolderQuery>,
) -> AppResult<Json<Vec<Snippet>>> {
    let scope = parse_folder_scope(params.folder.as_deref())?;
    let snippets = SnippetRepo::list(&state.pool, current.user.id, scope).await?;
    Ok(Json(snippets))
}

/// GET /api/v1/snippets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Snippet>> {
    let snippet = SnippetRepo::find_by_id(&state.pool, current.user.id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "snippet",
            id,
        }))?;
    Ok(Json(snippet))
}

/// PUT /api/v1/snippets/{id}
pub async fn update(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSnippet>,
) -> AppResult<Json<Snippet>> {
    if let Some(ref kind) = input.kind {
        SnippetKind::from_str(kind)?;
    }
    if let Some(ref tabs) = input.tabs {
        validate_tabs(tabs)?;
    }
    let snippet = SnippetRepo::update(&state.pool, current.user.id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "snippet",
            id,
        }))?;
    Ok(Json(snippet))
}

/// PUT /api/v1/snippets/{id}/folder
///
/// Places the snippet into an existing folder (or the unfiled root), or
/// creates a folder around it in one transaction when the body carries
/// `new_folder`. The target is validated before anything is written.
pub async fn place(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
    Json(input): Json<PlaceItemRequest>,
) -> AppResult<Json<PlacedSnippet>> {
    let owner_id = current.user.id;
    input.ensure_single_destination()?;

    if let Some(spec) = input.new_folder {
        let folder_input = check_new_folder(&state.pool, owner_id, DOMAIN_SNIPPETS, spec).await?;
        let (folder, snippet) =
            SnippetRepo::place_into_new_folder(&state.pool, owner_id, id, &folder_input)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "snippet",
                    id,
                }))?;
        return Ok(Json(PlacedSnippet {
            snippet,
            created_folder: Some(folder),
        }));
    }

    check_target(&state.pool, owner_id, input.folder_id, DOMAIN_SNIPPETS).await?;
    let snippet = SnippetRepo::set_folder(&state.pool, owner_id, id, input.folder_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "snippet",
            id,
        }))?;
    Ok(Json(PlacedSnippet {
        snippet,
        created_folder: None,
    }))
}

/// DELETE /api/v1/snippets/{id}
pub async fn delete(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SnippetRepo::delete(&state.pool, current.user.id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "snippet",
            id,
        }))
    }
}
