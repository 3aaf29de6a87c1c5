//! Repository for the `notes` table.
//!
//! Notes are the soft-deleting entity: `move_to_trash` and `restore`
//! flip `deleted_at` with compare-and-set guards, `purge` removes the
//! row for good. Read paths are split between active listings and the
//! trash listing.

use notestash_core::domain::{DEFAULT_NOTE_COLOR, NOTE_KIND_TEXT};
use notestash_core::types::DbId;
use sqlx::PgPool;

use crate::models::folder::{CreateFolder, Folder};
use crate::models::note::{CreateNote, Note, TrashedNote, UpdateNote};
use crate::repositories::folder_repo::FolderRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, content, kind, color, is_pinned, list_items, \
                       image_url, reminder_date, reminder_time, reminder_location, folder_id, \
                       deleted_at, created_at, updated_at";

/// Which slice of an owner's active notes to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderScope {
    /// Every active note regardless of folder.
    All,
    /// Active notes not placed in any folder.
    Unfiled,
    /// Active notes in one specific folder.
    In(DbId),
}

/// Provides CRUD and trash operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    // ── CRUD ──────────────────────────────────────────────────────────

    /// Insert a new note, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (owner_id, title, content, kind, color, is_pinned, list_items,
                                image_url, reminder_date, reminder_time, reminder_location,
                                folder_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(owner_id)
            .bind(input.title.as_deref().unwrap_or(""))
            .bind(input.content.as_deref().unwrap_or(""))
            .bind(input.kind.as_deref().unwrap_or(NOTE_KIND_TEXT))
            .bind(input.color.as_deref().unwrap_or(DEFAULT_NOTE_COLOR))
            .bind(input.is_pinned.unwrap_or(false))
            .bind(&input.list_items)
            .bind(&input.image_url)
            .bind(input.reminder_date)
            .bind(input.reminder_time)
            .bind(&input.reminder_location)
            .bind(input.folder_id)
            .fetch_one(pool)
            .await
    }

    /// Find an active note by ID, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE id = $1 AND owner_id = $2 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a note by ID regardless of trash state. Used by the
    /// idempotent trash transitions to tell "already there" from "gone".
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List an owner's active notes, pinned first, newest first within
    /// each group.
    pub async fn list_active(
        pool: &PgPool,
        owner_id: DbId,
        scope: FolderScope,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let mut sql = format!(
            "SELECT {COLUMNS} FROM notes WHERE owner_id = $1 AND deleted_at IS NULL"
        );
        match scope {
            FolderScope::All => {}
            FolderScope::Unfiled => sql.push_str(" AND folder_id IS NULL"),
            FolderScope::In(_) => sql.push_str(" AND folder_id = $2"),
        }
        sql.push_str(" ORDER BY is_pinned DESC, created_at DESC");

        let mut query = sqlx::query_as::<_, Note>(&sql).bind(owner_id);
        if let FolderScope::In(folder_id) = scope {
            query = query.bind(folder_id);
        }
        query.fetch_all(pool).await
    }

    /// Update an active note's content fields. Only non-`None` fields in
    /// `input` are applied.
    ///
    /// Returns `None` if the owner has no active note with the given `id`.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = COALESCE($3, title),
                content = COALESCE($4, content),
                kind = COALESCE($5, kind),
                color = COALESCE($6, color),
                is_pinned = COALESCE($7, is_pinned),
                list_items = COALESCE($8, list_items),
                image_url = COALESCE($9, image_url),
                reminder_date = COALESCE($10, reminder_date),
                reminder_time = COALESCE($11, reminder_time),
                reminder_location = COALESCE($12, reminder_location)
             WHERE id = $1 AND owner_id = $2 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.kind)
            .bind(&input.color)
            .bind(input.is_pinned)
            .bind(&input.list_items)
            .bind(&input.image_url)
            .bind(input.reminder_date)
            .bind(input.reminder_time)
            .bind(&input.reminder_location)
            .fetch_optional(pool)
            .await
    }

    // ── Placement ─────────────────────────────────────────────────────

    /// Move an active note into a folder, or out of any folder when
    /// `folder_id` is `None`.
    ///
    /// Callers must validate the target first; this method only writes.
    pub async fn set_folder(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        folder_id: Option<DbId>,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET folder_id = $3
             WHERE id = $1 AND owner_id = $2 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(folder_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a folder and move the note into it, atomically.
    ///
    /// Returns `None` (and creates nothing) if the owner has no active
    /// note with the given `id`.
    pub async fn place_into_new_folder(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        folder_input: &CreateFolder,
    ) -> Result<Option<(Folder, Note)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let folder = FolderRepo::create(&mut *tx, owner_id, folder_input).await?;
        let query = format!(
            "UPDATE notes SET folder_id = $3
             WHERE id = $1 AND owner_id = $2 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        let note = sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(folder.id)
            .fetch_optional(&mut *tx)
            .await?;

        match note {
            Some(note) => {
                tx.commit().await?;
                Ok(Some((folder, note)))
            }
            None => {
                tx.rollback().await?;
                Ok(None)
            }
        }
    }

    /// Count the active notes placed in a folder.
    pub async fn count_active_in_folder(pool: &PgPool, folder_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM notes WHERE folder_id = $1 AND deleted_at IS NULL",
        )
        .bind(folder_id)
        .fetch_one(pool)
        .await?;
        Ok(count.0)
    }

    // ── Trash ─────────────────────────────────────────────────────────

    /// Move an active note to the trash. Returns `None` if the owner has
    /// no active note with the given `id`; an already-trashed note is
    /// left untouched.
    pub async fn move_to_trash(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET deleted_at = NOW()
             WHERE id = $1 AND owner_id = $2 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Restore a trashed note. Returns `None` if the owner has no trashed
    /// note with the given `id`; an active note is left untouched.
    pub async fn restore(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET deleted_at = NULL
             WHERE id = $1 AND owner_id = $2 AND deleted_at IS NOT NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a note, trashed or not. Returns `true` if a
    /// row was removed.
    pub async fn purge(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List an owner's trashed notes, most recently trashed first.
    pub async fn list_trashed(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<TrashedNote>, sqlx::Error> {
        sqlx::query_as::<_, TrashedNote>(
            "SELECT id, title, kind, folder_id, deleted_at FROM notes
             WHERE owner_id = $1 AND deleted_at IS NOT NULL
             ORDER BY deleted_at DESC",
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }

    /// IDs of an owner's trashed notes, most recently trashed first.
    /// Snapshot queried once at the start of an empty-trash run.
    pub async fn trashed_ids(pool: &PgPool, owner_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as(
            "SELECT id FROM notes WHERE owner_id = $1 AND deleted_at IS NOT NULL
             ORDER BY deleted_at DESC",
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
