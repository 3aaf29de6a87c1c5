//! HTTP-level integration tests for the `/trash` API endpoints.
//!
//! Walks notes through the Active -> Trashed -> Purged lifecycle: listing
//! with the retention countdown, restore, single purge from both states,
//! and the bulk empty-trash sweep. The countdown tests backdate
//! `deleted_at` with raw SQL since the API always stamps the current time.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete_auth, get_auth, post_json_auth, token_for,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn alice() -> String {
    token_for("idp|1001", "alice@example.com")
}

fn bob() -> String {
    token_for("idp|2002", "bob@example.com")
}

/// Create a note through the API and return its id.
async fn create_note(pool: &PgPool, token: &str, title: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/notes",
        serde_json::json!({ "title": title }),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// Move a note to the trash through the API.
async fn trash_note(pool: &PgPool, token: &str, id: i64) {
    let app = build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/notes/{id}"), token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

/// Rewind a trashed note's deletion timestamp by whole days.
async fn backdate_deletion(pool: &PgPool, id: i64, days: i32) {
    sqlx::query("UPDATE notes SET deleted_at = NOW() - make_interval(days => $1) WHERE id = $2")
        .bind(days)
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/trash
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_trash_starts_empty(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/trash", &alice()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_count"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_trashed_note_lists_with_full_retention(pool: PgPool) {
    let id = create_note(&pool, &alice(), "Fresh in the trash").await;
    trash_note(&pool, &alice(), id).await;

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/trash", &alice()).await;
    let json = body_json(response).await;

    assert_eq!(json["total_count"], 1);
    let item = &json["items"][0];
    assert_eq!(item["id"], id);
    assert_eq!(item["title"], "Fresh in the trash");
    assert_eq!(item["kind"], "text");
    assert!(item["folder_id"].is_null());
    assert!(!item["deleted_at"].is_null());
    assert_eq!(
        item["days_remaining"], 30,
        "a note trashed moments ago has the full retention window"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_trash_orders_most_recently_deleted_first(pool: PgPool) {
    let first = create_note(&pool, &alice(), "First out").await;
    let second = create_note(&pool, &alice(), "Second out").await;
    let third = create_note(&pool, &alice(), "Third out").await;
    trash_note(&pool, &alice(), first).await;
    trash_note(&pool, &alice(), second).await;
    trash_note(&pool, &alice(), third).await;

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/trash", &alice()).await;
    let json = body_json(response).await;

    let ids: Vec<i64> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [third, second, first]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_days_remaining_counts_down_and_bottoms_out(pool: PgPool) {
    let ten_days = create_note(&pool, &alice(), "Ten days in").await;
    let expired = create_note(&pool, &alice(), "Long expired").await;
    trash_note(&pool, &alice(), ten_days).await;
    trash_note(&pool, &alice(), expired).await;
    backdate_deletion(&pool, ten_days, 10).await;
    backdate_deletion(&pool, expired, 45).await;

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/trash", &alice()).await;
    let json = body_json(response).await;

    for item in json["items"].as_array().unwrap() {
        match item["id"].as_i64().unwrap() {
            id if id == ten_days => assert_eq!(item["days_remaining"], 20),
            id if id == expired => assert_eq!(
                item["days_remaining"], 0,
                "past the window the countdown clamps to zero"
            ),
            other => panic!("unexpected trash item {other}"),
        }
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_trash_is_owner_scoped(pool: PgPool) {
    let bobs = create_note(&pool, &bob(), "Bobs secret").await;
    trash_note(&pool, &bob(), bobs).await;

    let app = build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/trash", &alice()).await;
    let json = body_json(response).await;
    assert_eq!(json["total_count"], 0, "another user's trash is invisible");

    let app = build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/trash/{bobs}/restore"),
        serde_json::json!({}),
        &alice(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/trash/{id}/restore
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_restore_makes_note_active_again(pool: PgPool) {
    let id = create_note(&pool, &alice(), "Round trip").await;
    trash_note(&pool, &alice(), id).await;

    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/trash/{id}/restore"),
        serde_json::json!({}),
        &alice(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["deleted_at"].is_null());

    // The note answers on the notes API again.
    let app = build_test_app(pool.clone());
    let response = get_auth(app, &format!("/api/v1/notes/{id}"), &alice()).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Restoring an already-active note reports the same success.
    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/trash/{id}/restore"),
        serde_json::json!({}),
        &alice(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Restoring a note that never existed does not.
    let app = build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/trash/999999/restore",
        serde_json::json!({}),
        &alice(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: DELETE /api/v1/trash/{id}/purge
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_purge_removes_trashed_note_for_good(pool: PgPool) {
    let id = create_note(&pool, &alice(), "No way back").await;
    trash_note(&pool, &alice(), id).await;

    let app = build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/trash/{id}/purge"), &alice()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/trash/{id}/restore"),
        serde_json::json!({}),
        &alice(),
    )
    .await;
    assert_eq!(
        response.status(),
        StatusCode::NOT_FOUND,
        "a purged note cannot be restored"
    );

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/trash", &alice()).await;
    let json = body_json(response).await;
    assert_eq!(json["total_count"], 0);
}

/// "Delete forever" skips the trash: an active note purges directly.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_purge_works_from_the_active_state(pool: PgPool) {
    let id = create_note(&pool, &alice(), "Straight to gone").await;

    let app = build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/trash/{id}/purge"), &alice()).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/notes/{id}"), &alice()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_purge_missing_note_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete_auth(app, "/api/v1/trash/999999/purge", &alice()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: DELETE /api/v1/trash/purge empties the whole trash
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_trash_sweeps_only_trashed_notes(pool: PgPool) {
    let kept = create_note(&pool, &alice(), "Still active").await;
    let doomed_a = create_note(&pool, &alice(), "Doomed A").await;
    let doomed_b = create_note(&pool, &alice(), "Doomed B").await;
    trash_note(&pool, &alice(), doomed_a).await;
    trash_note(&pool, &alice(), doomed_b).await;

    let app = build_test_app(pool.clone());
    let response = delete_auth(app, "/api/v1/trash/purge", &alice()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["attempted"], 2);
    assert!(json["failed"].as_array().unwrap().is_empty());
    let mut purged: Vec<i64> = json["purged_ids"]
        .as_array()
        .unwrap()
        .iter()
        .map(|id| id.as_i64().unwrap())
        .collect();
    purged.sort_unstable();
    let mut expected = vec![doomed_a, doomed_b];
    expected.sort_unstable();
    assert_eq!(purged, expected);

    // The trash is empty and the active note survived.
    let app = build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/trash", &alice()).await;
    let json = body_json(response).await;
    assert_eq!(json["total_count"], 0);

    let app = build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/notes/{kept}"), &alice()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_trash_with_nothing_to_do(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete_auth(app, "/api/v1/trash/purge", &alice()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["attempted"], 0);
    assert!(json["purged_ids"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_trash_leaves_other_users_alone(pool: PgPool) {
    let bobs = create_note(&pool, &bob(), "Bobs trash").await;
    trash_note(&pool, &bob(), bobs).await;

    let app = build_test_app(pool.clone());
    let response = delete_auth(app, "/api/v1/trash/purge", &alice()).await;
    let json = body_json(response).await;
    assert_eq!(json["attempted"], 0);

    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/trash", &bob()).await;
    let json = body_json(response).await;
    assert_eq!(json["total_count"], 1, "bob's trash is untouched");
}
