//! Repository for the `snippets` table.
//!
//! Snippets never pass through the trash; `delete` removes the row
//! outright.

use notestash_core::domain::SNIPPET_KIND_SNIPPET;
use notestash_core::types::DbId;
use sqlx::PgPool;

use crate::models::folder::{CreateFolder, Folder};
use crate::models::snippet::{CreateSnippet, Snippet, UpdateSnippet};
use crate::repositories::folder_repo::FolderRepo;
use crate::repositories::note_repo::FolderScope;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, kind, language, code, observations, tabs, \
                       folder_id, created_at, updated_at";

/// Provides CRUD operations for snippets.
pub struct SnippetRepo;

impl SnippetRepo {
    /// Insert a new snippet, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateSnippet,
    ) -> Result<Snippet, sqlx::Error> {
        let query = format!(
            "INSERT INTO snippets (owner_id, title, kind, language, code, observations, tabs,
                                   folder_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Snippet>(&query)
            .bind(owner_id)
            .bind(input.title.as_deref().unwrap_or(""))
            .bind(input.kind.as_deref().unwrap_or(SNIPPET_KIND_SNIPPET))
            .bind(input.language.as_deref().unwrap_or(""))
            .bind(input.code.as_deref().unwrap_or(""))
            .bind(input.observations.as_deref().unwrap_or(""))
            .bind(&input.tabs)
            .bind(input.folder_id)
            .fetch_one(pool)
            .await
    }

    /// Find a snippet by ID, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Snippet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM snippets WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Snippet>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List an owner's snippets, newest first.
    pub async fn list(
        pool: &PgPool,
        owner_id: DbId,
        scope: FolderScope,
    ) -> Result<Vec<Snippet>, sqlx::Error> {
        let mut sql = format!("SELECT {COLUMNS} FROM snippets WHERE owner_id = $1");
        match scope {
            FolderScope::All => {}
            FolderScope::Unfiled => sql.push_str(" AND folder_id IS NULL"),
            FolderScope::In(_) => sql.push_str(" AND folder_id = $2"),
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut query = sqlx::query_as::<_, Snippet>(&sql).bind(owner_id);
        if let FolderScope::In(folder_id) = scope {
            query = query.bind(folder_id);
        }
        query.fetch_all(pool).await
    }

    /// Update a snippet's content fields. Only non-`None` fields in
    /// `input` are applied.
    ///
    /// Returns `None` if the owner has no snippet with the given `id`.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateSnippet,
    ) -> Result<Option<Snippet>, sqlx::Error> {
        let query = format!(
            "UPDATE snippets SET
                title = COALESCE($3, title),
                kind = COALESCE($4, kind),
                language = COALESCE($5, language),
                code = COALESCE($6, code),
                observations = COALESCE($7, observations),
                tabs = COALESCE($8, tabs)
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Snippet>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.kind)
            .bind(&input.language)
            .bind(&input.code)
            .bind(&input.observations)
            .bind(&input.tabs)
            .fetch_optional(pool)
            .await
    }

    /// Move a snippet into a folder, or out of any folder when
    /// `folder_id` is `None`.
    ///
    /// Callers must validate the target first; this method only writes.
    pub async fn set_folder(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        folder_id: Option<DbId>,
    ) -> Result<Option<Snippet>, sqlx::Error> {
        let query = format!(
            "UPDATE snippets SET folder_id = $3 WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Snippet>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(folder_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a folder and move the snippet into it, atomically.
    ///
    /// Returns `None` (and creates nothing) if the owner has no snippet
    /// with the given `id`.
    pub async fn place_into_new_folder(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        folder_input: &CreateFolder,
    ) -> Result<Option<(Folder, Snippet)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let folder = FolderRepo::create(&mut *tx, owner_id, folder_input).await?;
        let query = format!(
            "UPDATE snippets SET folder_id = $3 WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        let snippet = sqlx::query_as::<_, Snippet>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(folder.id)
            .fetch_optional(&mut *tx)
            .await?;

        match snippet {
            Some(snippet) => {
                tx.commit().await?;
                Ok(Some((folder, snippet)))
            }
            None => {
                tx.rollback().await?;
                Ok(None)
            }
        }
    }

    /// Count the snippets placed in a folder.
    pub async fn count_in_folder(pool: &PgPool, folder_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM snippets WHERE folder_id = $1")
            .bind(folder_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Permanently delete a snippet. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM snippets WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
