//! Note entity model.

use notestash_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
///
/// A note with `deleted_at` set is in the trash; it stays there until it
/// is restored or purged. Every other field is untouched by the trash
/// transitions.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub content: String,
    /// Presentation kind: `text`, `list` or `image`.
    pub kind: String,
    pub color: String,
    pub is_pinned: bool,
    /// Checklist entries for `list` notes, as a JSON array of
    /// `{id, text, completed}` objects.
    pub list_items: Option<serde_json::Value>,
    pub image_url: Option<String>,
    pub reminder_date: Option<chrono::NaiveDate>,
    pub reminder_time: Option<chrono::NaiveTime>,
    pub reminder_location: Option<String>,
    pub folder_id: Option<DbId>,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new note.
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub kind: Option<String>,
    pub color: Option<String>,
    pub is_pinned: Option<bool>,
    pub list_items: Option<serde_json::Value>,
    pub image_url: Option<String>,
    pub reminder_date: Option<chrono::NaiveDate>,
    pub reminder_time: Option<chrono::NaiveTime>,
    pub reminder_location: Option<String>,
    pub folder_id: Option<DbId>,
}

/// DTO for updating a note's content fields.
///
/// Placement and trash state change through their own operations, so
/// `folder_id` and `deleted_at` are deliberately absent here.
#[derive(Debug, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub kind: Option<String>,
    pub color: Option<String>,
    pub is_pinned: Option<bool>,
    pub list_items: Option<serde_json::Value>,
    pub image_url: Option<String>,
    pub reminder_date: Option<chrono::NaiveDate>,
    pub reminder_time: Option<chrono::NaiveTime>,
    pub reminder_location: Option<String>,
}

/// Trash listing projection of a note.
///
/// `deleted_at` is non-optional here: a row only shows up in the trash
/// once the timestamp is set.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TrashedNote {
    pub id: DbId,
    pub title: String,
    pub kind: String,
    pub folder_id: Option<DbId>,
    pub deleted_at: Timestamp,
}
