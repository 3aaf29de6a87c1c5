use axum::{routing::get, Json, Router};
use notestash_db::models::user::User;

use crate::identity::CurrentUser;
use crate::state::AppState;

/// GET /api/v1/me -- returns the caller's resolved identity.
///
/// The extractor upserts the user row, so the first call from a new
/// subject is what creates it.
async fn me(current: CurrentUser) -> Json<User> {
    Json(current.user)
}

/// Routes mounted at `/me`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(me))
}
