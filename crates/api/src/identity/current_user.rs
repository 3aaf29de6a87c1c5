//! Identity-token extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use notestash_core::error::CoreError;
use notestash_db::models::user::User;
use notestash_db::repositories::UserRepo;

use crate::error::AppError;
use crate::identity::token::validate_token;
use crate::state::AppState;

/// The caller resolved from the Bearer token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires a signed-in
/// user:
///
/// ```ignore
/// async fn my_handler(current: CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = current.user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// The users table mirrors the identity provider lazily: the first request
/// from a subject inserts the row, later requests refresh the stored email.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The caller's row in the `users` table.
    pub user: User,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthenticated(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthenticated(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.identity).map_err(|_| {
            AppError::Core(CoreError::Unauthenticated(
                "Invalid or expired token".into(),
            ))
        })?;

        let user = UserRepo::upsert(&state.pool, &claims.sub, &claims.email).await?;

        Ok(CurrentUser { user })
    }
}
