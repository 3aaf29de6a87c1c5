//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::User;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, external_id, email, created_at, updated_at";

/// Provides lookup and lazy-provisioning operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert or refresh the row mirroring an identity-provider subject.
    ///
    /// The first authenticated request from a subject creates the row;
    /// later requests keep the stored email in sync with the token.
    pub async fn upsert(
        pool: &PgPool,
        external_id: &str,
        email: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (external_id, email)
             VALUES ($1, $2)
             ON CONFLICT (external_id) DO UPDATE SET email = EXCLUDED.email
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(external_id)
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// Find a user by the identity provider's subject identifier.
    pub async fn find_by_external_id(
        pool: &PgPool,
        external_id: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE external_id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(external_id)
            .fetch_optional(pool)
            .await
    }
}
