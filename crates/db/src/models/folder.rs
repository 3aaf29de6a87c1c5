//! Folder entity model.

use notestash_core::hierarchy::HierarchyItem;
use notestash_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `folders` table.
///
/// Folders form a per-owner, per-kind forest: `parent_id` may point at
/// another folder of the same owner and kind, or be NULL for a root.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Folder {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub color: String,
    /// Which item domain the folder holds: `snippets` or `notes`.
    pub kind: String,
    pub parent_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl HierarchyItem for Folder {
    fn id(&self) -> DbId {
        self.id
    }

    fn parent_id(&self) -> Option<DbId> {
        self.parent_id
    }
}

/// DTO for creating a new folder.
#[derive(Debug, Deserialize)]
pub struct CreateFolder {
    pub name: String,
    pub color: Option<String>,
    pub kind: String,
    pub parent_id: Option<DbId>,
}

/// DTO for updating a folder's name or color.
///
/// Re-parenting goes through a dedicated operation so a move can be
/// cycle-checked against the full sibling set.
#[derive(Debug, Deserialize)]
pub struct UpdateFolder {
    pub name: Option<String>,
    pub color: Option<String>,
}
