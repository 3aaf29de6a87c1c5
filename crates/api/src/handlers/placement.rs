//! Shared placement plumbing for filed resources.
//!
//! Notes and snippets are placed the same way: the request either names an
//! existing target folder (`folder_id`, null meaning unfiled) or asks for a
//! folder to be created around the item (`new_folder`). The helpers here
//! resolve and validate the target before any write happens, so both
//! resources fail identically and without partial mutation.

use notestash_core::domain::validate_folder_name;
use notestash_core::placement::validate_placement;
use notestash_core::types::DbId;
use notestash_db::models::folder::CreateFolder;
use notestash_db::repositories::note_repo::FolderScope;
use notestash_db::repositories::FolderRepo;
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Body of `PUT /{resource}/{id}/folder`.
///
/// Exactly one way of naming the destination may be used: `folder_id`
/// (absent or null meaning the unfiled root) or `new_folder`.
#[derive(Debug, Deserialize)]
pub struct PlaceItemRequest {
    /// Existing destination folder, or null/absent for the unfiled root.
    pub folder_id: Option<DbId>,
    /// Create this folder and place the item into it.
    pub new_folder: Option<NewFolderSpec>,
}

/// Folder to create as part of a placement.
///
/// The payload carries no kind: the created folder always takes the
/// domain of the item being placed.
#[derive(Debug, Deserialize)]
pub struct NewFolderSpec {
    pub name: String,
    pub color: Option<String>,
    pub parent_id: Option<DbId>,
}

impl PlaceItemRequest {
    /// Reject bodies that name both an existing folder and a new one.
    pub fn ensure_single_destination(&self) -> AppResult<()> {
        if self.folder_id.is_some() && self.new_folder.is_some() {
            return Err(AppError::BadRequest(
                "Provide either folder_id or new_folder, not both".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve and validate an existing placement target.
///
/// Looks the folder up by id alone and runs the placement checks in order
/// (exists, holds the item's domain, belongs to the caller). `None` is the
/// unfiled root and always passes.
pub async fn check_target(
    pool: &PgPool,
    owner_id: DbId,
    requested: Option<DbId>,
    domain: &str,
) -> AppResult<()> {
    let facts = match requested {
        Some(folder_id) => FolderRepo::find_facts(pool, folder_id).await?,
        None => None,
    };
    validate_placement(requested, facts.as_ref(), domain, owner_id)?;
    Ok(())
}

/// Validate a new-folder spec and shape it for insertion.
///
/// The folder inherits the item's domain as its kind; its parent, when
/// given, must pass the same placement checks as any other target of that
/// domain.
pub async fn check_new_folder(
    pool: &PgPool,
    owner_id: DbId,
    domain: &str,
    spec: NewFolderSpec,
) -> AppResult<CreateFolder> {
    validate_folder_name(&spec.name)?;
    check_target(pool, owner_id, spec.parent_id, domain).await?;
    Ok(CreateFolder {
        name: spec.name,
        color: spec.color,
        kind: domain.to_string(),
        parent_id: spec.parent_id,
    })
}

/// Query parameters for the note and snippet listing endpoints.
#[derive(Debug, Deserialize)]
pub struct FolderQuery {
    /// Folder scope: `all` (the default), `unfiled`, or a folder id.
    pub folder: Option<String>,
}

/// Parse the `?folder=` listing scope: `all`, `unfiled`, or a folder id.
///
/// An absent parameter means `all`.
pub fn parse_folder_scope(param: Option<&str>) -> AppResult<FolderScope> {
    match param {
        None | Some("all") => Ok(FolderScope::All),
        Some("unfiled") => Ok(FolderScope::Unfiled),
        Some(raw) => raw.parse::<DbId>().map(FolderScope::In).map_err(|_| {
            AppError::BadRequest(format!(
                "Invalid folder scope '{raw}': expected 'all', 'unfiled', or a folder id"
            ))
        }),
    }
}
