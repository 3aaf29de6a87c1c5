//! Repository for the `folders` table.

use notestash_core::domain::DEFAULT_FOLDER_COLOR;
use notestash_core::placement::FolderFacts;
use notestash_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::folder::{CreateFolder, Folder, UpdateFolder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, name, color, kind, parent_id, created_at, updated_at";

/// Provides CRUD operations for folders.
pub struct FolderRepo;

impl FolderRepo {
    /// Insert a new folder, returning the created row.
    ///
    /// Generic over the executor so the insert can also run inside the
    /// create-and-place transaction.
    pub async fn create<'e, E>(
        executor: E,
        owner_id: DbId,
        input: &CreateFolder,
    ) -> Result<Folder, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO folders (owner_id, name, color, kind, parent_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(owner_id)
            .bind(&input.name)
            .bind(input.color.as_deref().unwrap_or(DEFAULT_FOLDER_COLOR))
            .bind(&input.kind)
            .bind(input.parent_id)
            .fetch_one(executor)
            .await
    }

    /// Find a folder by ID, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM folders WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the placement-relevant facts of a folder, regardless of owner.
    ///
    /// Deliberately unscoped: placement validation reports a cross-owner
    /// target as an invalid placement, which requires seeing the row.
    pub async fn find_facts(pool: &PgPool, id: DbId) -> Result<Option<FolderFacts>, sqlx::Error> {
        let row: Option<(DbId, DbId, String)> =
            sqlx::query_as("SELECT id, owner_id, kind FROM folders WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|(id, owner_id, kind)| FolderFacts {
            id,
            owner_id,
            kind,
        }))
    }

    /// List an owner's folders of one kind, ordered by name.
    pub async fn list(
        pool: &PgPool,
        owner_id: DbId,
        kind: &str,
    ) -> Result<Vec<Folder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM folders WHERE owner_id = $1 AND kind = $2 ORDER BY name ASC"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(owner_id)
            .bind(kind)
            .fetch_all(pool)
            .await
    }

    /// Update a folder's name or color. Only non-`None` fields are applied.
    ///
    /// Returns `None` if the owner has no folder with the given `id`.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateFolder,
    ) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!(
            "UPDATE folders SET
                name = COALESCE($3, name),
                color = COALESCE($4, color)
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Move a folder under a new parent, or to the root when `parent_id`
    /// is `None`.
    ///
    /// Callers must run the cycle check first; this method only writes.
    pub async fn set_parent(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        parent_id: Option<DbId>,
    ) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!(
            "UPDATE folders SET parent_id = $3 WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(parent_id)
            .fetch_optional(pool)
            .await
    }

    /// Count the direct child folders of a folder.
    pub async fn count_children(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM folders WHERE parent_id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Permanently delete a folder. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
