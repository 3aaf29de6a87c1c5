//! User entity model.

use notestash_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `users` table.
///
/// Users are never registered directly: the row is lazily upserted the
/// first time an identity-provider subject calls an authenticated route.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: DbId,
    /// Subject identifier issued by the external identity provider.
    pub external_id: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
