//! Snippet entity model.

use notestash_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `snippets` table.
///
/// Snippets have no trash state: deleting one removes the row outright.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Snippet {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    /// Presentation kind: `snippet` or `markdown`.
    pub kind: String,
    pub language: String,
    pub code: String,
    pub observations: String,
    /// Extra editor tabs, as a JSON array of
    /// `{id, title, language, code}` objects.
    pub tabs: Option<serde_json::Value>,
    pub folder_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new snippet.
#[derive(Debug, Deserialize)]
pub struct CreateSnippet {
    pub title: Option<String>,
    pub kind: Option<String>,
    pub language: Option<String>,
    pub code: Option<String>,
    pub observations: Option<String>,
    pub tabs: Option<serde_json::Value>,
    pub folder_id: Option<DbId>,
}

/// DTO for updating a snippet's content fields.
///
/// Placement changes through its own operation, so `folder_id` is
/// deliberately absent here.
#[derive(Debug, Deserialize)]
pub struct UpdateSnippet {
    pub title: Option<String>,
    pub kind: Option<String>,
    pub language: Option<String>,
    pub code: Option<String>,
    pub observations: Option<String>,
    pub tabs: Option<serde_json::Value>,
}
