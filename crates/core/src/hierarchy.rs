//! Folder hierarchy algorithms.
//!
//! Pure logic for assembling a flat folder listing into a forest, resolving
//! breadcrumb trails, and guarding re-parent moves against cycles. The
//! functions are generic over [`HierarchyItem`] so they stay decoupled from
//! the database row types.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// A record that participates in a parent-pointer hierarchy.
pub trait HierarchyItem {
    fn id(&self) -> DbId;
    fn parent_id(&self) -> Option<DbId>;
}

/// A hierarchy item together with its resolved children, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode<T> {
    #[serde(flatten)]
    pub item: T,
    pub children: Vec<TreeNode<T>>,
}

/// Assemble a flat folder listing into a forest.
///
/// Two passes: every id is indexed first, then each record is linked to its
/// parent when the parent resolves within the input. A record whose parent
/// pointer is null, dangling, or points at itself becomes a root. Members
/// of a parent cycle are re-rooted at the first member in input order, so
/// no input shape can hang the build or drop a record. Children keep the
/// input order of the flat listing; genuine roots come first in input
/// order, re-rooted cycle members after them. Ids are assumed unique (they
/// are primary keys); the walk never recurses, so arbitrarily deep chains
/// are fine.
pub fn build_forest<T: HierarchyItem>(items: Vec<T>) -> Vec<TreeNode<T>> {
    let ids: Vec<DbId> = items.iter().map(|item| item.id()).collect();
    let id_set: HashSet<DbId> = ids.iter().copied().collect();

    // Link pass: resolve each record's effective parent.
    let mut parent_of: HashMap<DbId, DbId> = HashMap::new();
    let mut children_of: HashMap<DbId, Vec<DbId>> = HashMap::new();
    let mut roots: Vec<DbId> = Vec::new();
    for item in &items {
        let id = item.id();
        match item.parent_id() {
            Some(parent) if parent != id && id_set.contains(&parent) => {
                parent_of.insert(id, parent);
                children_of.entry(parent).or_default().push(id);
            }
            _ => roots.push(id),
        }
    }

    // Breadth-first walk from the roots, recording each node's depth.
    // Anything still unvisited once the queue drains sits in a parent
    // cycle; the first such record (input order) is re-rooted and the walk
    // continues from it.
    let mut visited: HashSet<DbId> = HashSet::new();
    let mut order: Vec<(DbId, usize)> = Vec::new();
    let mut queue: VecDeque<(DbId, usize)> = roots.iter().map(|&id| (id, 0)).collect();
    let mut cursor = ids.iter();
    loop {
        while let Some((current, depth)) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            order.push((current, depth));
            if let Some(kids) = children_of.get(&current) {
                for &kid in kids {
                    if !visited.contains(&kid) {
                        queue.push_back((kid, depth + 1));
                    }
                }
            }
        }
        match cursor.find(|id| !visited.contains(*id)) {
            Some(&id) => {
                parent_of.remove(&id);
                roots.push(id);
                queue.push_back((id, 0));
            }
            None => break,
        }
    }

    // Assemble bottom-up: deepest level first, so every node's children are
    // complete before the node itself is attached to its parent.
    let mut nodes: HashMap<DbId, TreeNode<T>> = items
        .into_iter()
        .map(|item| {
            (
                item.id(),
                TreeNode {
                    item,
                    children: Vec::new(),
                },
            )
        })
        .collect();

    let max_depth = order.iter().map(|&(_, depth)| depth).max().unwrap_or(0);
    let mut levels: Vec<Vec<DbId>> = vec![Vec::new(); max_depth + 1];
    for &(id, depth) in &order {
        levels[depth].push(id);
    }
    for level in levels.iter().rev() {
        for id in level {
            let Some(&parent) = parent_of.get(id) else {
                continue;
            };
            let Some(child) = nodes.remove(id) else {
                continue;
            };
            if let Some(parent_node) = nodes.get_mut(&parent) {
                parent_node.children.push(child);
            }
        }
    }

    roots.iter().filter_map(|id| nodes.remove(id)).collect()
}

/// Resolve the breadcrumb trail for `target_id`: the ordered sequence from
/// the top-most ancestor down to the target itself.
///
/// The walk follows parent pointers upward, stopping at a record whose
/// parent is null or absent from the input (dangling parents truncate the
/// trail rather than failing). Revisiting any id means the persisted graph
/// has a cycle, which surfaces as `CorruptHierarchy` instead of a hang.
pub fn breadcrumb_trail<T: HierarchyItem>(
    items: &[T],
    target_id: DbId,
) -> Result<Vec<&T>, CoreError> {
    let by_id: HashMap<DbId, &T> = items.iter().map(|item| (item.id(), item)).collect();
    let Some(&target) = by_id.get(&target_id) else {
        return Err(CoreError::NotFound {
            entity: "folder",
            id: target_id,
        });
    };

    let mut trail: Vec<&T> = Vec::new();
    let mut visited: HashSet<DbId> = HashSet::new();
    let mut current = target;
    loop {
        if !visited.insert(current.id()) {
            return Err(CoreError::CorruptHierarchy(format!(
                "Cycle detected while resolving ancestors of folder {target_id}"
            )));
        }
        trail.push(current);
        match current.parent_id().and_then(|parent| by_id.get(&parent).copied()) {
            Some(parent) => current = parent,
            None => break,
        }
    }
    trail.reverse();
    Ok(trail)
}

/// Guard a re-parent move: reject it when walking upward from the proposed
/// parent reaches the folder being moved, which would make the folder its
/// own ancestor. The walk carries a visited-set, so a cycle already present
/// above the proposed parent is rejected as well instead of looping.
pub fn ensure_no_cycle<T: HierarchyItem>(
    items: &[T],
    folder_id: DbId,
    new_parent_id: DbId,
) -> Result<(), CoreError> {
    let by_id: HashMap<DbId, &T> = items.iter().map(|item| (item.id(), item)).collect();
    let mut visited: HashSet<DbId> = HashSet::new();
    let mut current = Some(new_parent_id);
    while let Some(id) = current {
        if id == folder_id {
            return Err(CoreError::CorruptHierarchy(format!(
                "Moving folder {folder_id} under folder {new_parent_id} would create a cycle"
            )));
        }
        if !visited.insert(id) {
            return Err(CoreError::CorruptHierarchy(format!(
                "Cycle detected above folder {new_parent_id}"
            )));
        }
        current = by_id.get(&id).and_then(|item| item.parent_id());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
