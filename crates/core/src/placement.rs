//! Placement rules for moving items into folders.
//!
//! A note, snippet, or folder is "placed" by pointing it at a target folder
//! or at the unfiled root (null). The checks here run before any mutation;
//! a placement that fails leaves the item untouched.

use crate::error::CoreError;
use crate::types::DbId;

/// The fields of a prospective target folder that placement inspects.
///
/// Deliberately owner-unscoped: the caller looks the folder up by id alone
/// so that a cross-owner target is reported as an invalid placement rather
/// than leaking into a not-found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderFacts {
    pub id: DbId,
    pub owner_id: DbId,
    pub kind: String,
}

/// Validate that an item of `domain` owned by `owner_id` may be placed into
/// the requested folder.
///
/// `requested` is the folder id from the request, `None` meaning the
/// unfiled root, which is always a valid target. `target` is the folder row
/// resolved by id, `None` when the id did not resolve. Checks run in order:
/// the folder must exist, its kind must equal the item's domain, and its
/// owner must equal the caller. Every failure is `InvalidPlacement`.
pub fn validate_placement(
    requested: Option<DbId>,
    target: Option<&FolderFacts>,
    domain: &str,
    owner_id: DbId,
) -> Result<(), CoreError> {
    let Some(folder_id) = requested else {
        return Ok(());
    };
    let Some(folder) = target else {
        return Err(CoreError::InvalidPlacement(format!(
            "Folder {folder_id} does not exist"
        )));
    };
    if folder.kind != domain {
        return Err(CoreError::InvalidPlacement(format!(
            "Folder {} holds {} items, not {domain}",
            folder.id, folder.kind
        )));
    }
    if folder.owner_id != owner_id {
        return Err(CoreError::InvalidPlacement(format!(
            "Folder {} belongs to another user",
            folder.id
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DOMAIN_NOTES, DOMAIN_SNIPPETS};
    use assert_matches::assert_matches;

    fn facts(id: DbId, owner_id: DbId, kind: &str) -> FolderFacts {
        FolderFacts {
            id,
            owner_id,
            kind: kind.to_string(),
        }
    }

    #[test]
    fn unfiled_root_is_always_valid() {
        assert!(validate_placement(None, None, DOMAIN_NOTES, 1).is_ok());
    }

    #[test]
    fn matching_domain_and_owner_is_valid() {
        let folder = facts(5, 1, DOMAIN_NOTES);
        assert!(validate_placement(Some(5), Some(&folder), DOMAIN_NOTES, 1).is_ok());
    }

    #[test]
    fn missing_folder_is_invalid_placement() {
        let err = validate_placement(Some(5), None, DOMAIN_NOTES, 1).unwrap_err();
        assert_matches!(err, CoreError::InvalidPlacement(_));
    }

    #[test]
    fn domain_mismatch_is_invalid_placement() {
        let folder = facts(5, 1, DOMAIN_SNIPPETS);
        let err = validate_placement(Some(5), Some(&folder), DOMAIN_NOTES, 1).unwrap_err();
        assert_matches!(err, CoreError::InvalidPlacement(_));
    }

    #[test]
    fn cross_owner_is_invalid_placement() {
        let folder = facts(5, 2, DOMAIN_NOTES);
        let err = validate_placement(Some(5), Some(&folder), DOMAIN_NOTES, 1).unwrap_err();
        assert_matches!(err, CoreError::InvalidPlacement(_));
    }

    #[test]
    fn domain_check_runs_before_owner_check() {
        let folder = facts(5, 2, DOMAIN_SNIPPETS);
        let err = validate_placement(Some(5), Some(&folder), DOMAIN_NOTES, 1).unwrap_err();
        assert_matches!(err, CoreError::InvalidPlacement(message) => {
            assert!(message.contains("holds"));
        });
    }
}
