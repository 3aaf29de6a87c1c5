//! Trash retention math and bulk purge aggregation.
//!
//! A trashed note carries a `deleted_at` timestamp; how long it has left in
//! the retention window is a read-time projection, recomputed per listing
//! and never persisted. Nothing here schedules automatic expiry: purging is
//! always an explicit caller action.

use std::fmt::Display;
use std::future::Future;

use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// Days a trashed note stays restorable; shown as a countdown in the trash.
pub const RETENTION_DAYS: i64 = 30;

/// Whole days left in the retention window for a note deleted at
/// `deleted_at`, clamped to `0..=RETENTION_DAYS` so clock skew can never
/// push the countdown out of range.
pub fn days_remaining(deleted_at: Timestamp, now: Timestamp) -> i64 {
    let elapsed = (now - deleted_at).num_days();
    (RETENTION_DAYS - elapsed).clamp(0, RETENTION_DAYS)
}

/// Outcome of one failed purge inside a bulk run.
#[derive(Debug, Clone, Serialize)]
pub struct PurgeFailure {
    pub id: DbId,
    pub error: String,
}

/// Per-item outcomes of an empty-trash run.
#[derive(Debug, Clone, Serialize)]
pub struct EmptyTrashReport {
    pub attempted: usize,
    pub purged_ids: Vec<DbId>,
    pub failed: Vec<PurgeFailure>,
}

impl EmptyTrashReport {
    /// True when every attempted purge succeeded.
    pub fn all_purged(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Purge each id independently, collecting per-item outcomes.
///
/// The ids are processed in order and one failure never aborts the
/// remainder: the failed ids stay in the trash and are reported alongside
/// the ids that were purged. A purge that finds its row already gone still
/// counts as purged, since the end state is what the caller asked for.
pub async fn purge_each<F, Fut, E>(ids: Vec<DbId>, mut purge: F) -> EmptyTrashReport
where
    F: FnMut(DbId) -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: Display,
{
    let mut report = EmptyTrashReport {
        attempted: ids.len(),
        purged_ids: Vec::new(),
        failed: Vec::new(),
    };
    for id in ids {
        match purge(id).await {
            Ok(()) => report.purged_ids.push(id),
            Err(error) => report.failed.push(PurgeFailure {
                id,
                error: error.to_string(),
            }),
        }
    }
    report
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
