//! Parent → children index over a flat folder listing.
//!
//! The index borrows the snapshot it was built from and is rebuilt on
//! every query; nothing is cached between calls because the remote tree
//! can change at any time.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use driveview_core::types::FolderId;
use driveview_entity::{FolderNode, FolderTree, FolderTreeNode};

use crate::sort::compare_names;

/// Derived `parent → [children]` mapping over one folder snapshot.
#[derive(Debug, Clone)]
pub struct SubtreeIndex<'a> {
    /// Folders keyed under the drive root, including broken references.
    roots: Vec<&'a FolderNode>,
    /// Child folders keyed by their parent's ID.
    children: HashMap<&'a str, Vec<&'a FolderNode>>,
}

impl<'a> SubtreeIndex<'a> {
    /// Build the index in one pass over the snapshot.
    ///
    /// A folder whose parent is absent from the snapshot is indexed as a
    /// root folder.
    pub fn build(all_folders: &'a [FolderNode]) -> Self {
        let known: HashSet<&str> = all_folders.iter().map(|f| f.id.as_str()).collect();
        let mut roots = Vec::new();
        let mut children: HashMap<&'a str, Vec<&'a FolderNode>> = HashMap::new();

        for folder in all_folders {
            match folder.parent_id.as_ref() {
                Some(parent) if known.contains(parent.as_str()) => {
                    children.entry(parent.as_str()).or_default().push(folder);
                }
                Some(parent) => {
                    debug!(
                        folder_id = %folder.id,
                        parent_id = %parent,
                        "Parent missing from listing, treating folder as root"
                    );
                    roots.push(folder);
                }
                None => roots.push(folder),
            }
        }

        Self { roots, children }
    }

    /// Direct child folders of `parent` (`None` for the drive root), in
    /// listing order.
    pub fn children_of(&self, parent: Option<&str>) -> &[&'a FolderNode] {
        match parent {
            None => &self.roots,
            Some(id) => self.children.get(id).map(Vec::as_slice).unwrap_or(&[]),
        }
    }

    /// IDs of `start` and all of its descendants.
    ///
    /// With `start = None` the result is the union of every root folder's
    /// subtree; the drive root itself has no ID and is not included.
    pub fn subtree_ids(&self, start: Option<&FolderId>) -> HashSet<FolderId> {
        let mut result = HashSet::new();
        let mut stack: Vec<&str> = Vec::new();

        match start {
            Some(id) => {
                result.insert(id.clone());
                stack.push(id.as_str());
            }
            None => {
                for folder in &self.roots {
                    if result.insert(folder.id.clone()) {
                        stack.push(folder.id.as_str());
                    }
                }
            }
        }

        while let Some(current) = stack.pop() {
            for child in self.children_of(Some(current)) {
                // A folder already in the result is not expanded twice,
                // which also stops cycles.
                if result.insert(child.id.clone()) {
                    stack.push(child.id.as_str());
                }
            }
        }

        result
    }

    /// Build a nested display tree below `start`, at most `max_depth`
    /// levels deep (unlimited when `None`). Children are ordered by name.
    pub fn folder_tree(&self, start: Option<&FolderId>, max_depth: Option<usize>) -> FolderTree {
        let mut visited: HashSet<&str> = HashSet::new();
        if let Some(id) = start {
            visited.insert(id.as_str());
        }

        let mut total_folders = 0;
        let roots = self.tree_level(
            start.map(FolderId::as_str),
            0,
            max_depth,
            &mut visited,
            &mut total_folders,
        );

        FolderTree {
            roots,
            total_folders,
        }
    }

    fn tree_level<'v>(
        &self,
        parent: Option<&str>,
        depth: usize,
        max_depth: Option<usize>,
        visited: &mut HashSet<&'v str>,
        total: &mut usize,
    ) -> Vec<FolderTreeNode>
    where
        'a: 'v,
    {
        if max_depth.is_some_and(|max| depth >= max) {
            return Vec::new();
        }

        let mut level: Vec<&'a FolderNode> = self.children_of(parent).to_vec();
        level.sort_by(|a, b| compare_names(&a.name, &b.name).then_with(|| a.id.cmp(&b.id)));

        let mut nodes = Vec::with_capacity(level.len());
        for folder in level {
            if !visited.insert(folder.id.as_str()) {
                continue;
            }
            *total += 1;
            let children = self.tree_level(
                Some(folder.id.as_str()),
                depth + 1,
                max_depth,
                visited,
                total,
            );
            nodes.push(FolderTreeNode {
                id: folder.id.clone(),
                name: folder.name.clone(),
                depth,
                child_count: self.children_of(Some(folder.id.as_str())).len(),
                children,
            });
        }
        nodes
    }
}

/// Compute the set of `start` and all of its descendant folder IDs.
pub fn compute_subtree_ids(
    all_folders: &[FolderNode],
    start: Option<&FolderId>,
) -> HashSet<FolderId> {
    SubtreeIndex::build(all_folders).subtree_ids(start)
}

/// Build a nested folder tree below `start`.
pub fn build_folder_tree(
    all_folders: &[FolderNode],
    start: Option<&FolderId>,
    max_depth: Option<usize>,
) -> FolderTree {
    SubtreeIndex::build(all_folders).folder_tree(start, max_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str, name: &str, parent: Option<&str>) -> FolderNode {
        FolderNode::new(id, name, parent.map(FolderId::from))
    }

    fn ids(items: &[&str]) -> HashSet<FolderId> {
        items.iter().map(|id| FolderId::from(*id)).collect()
    }

    fn sample() -> Vec<FolderNode> {
        vec![
            folder("a", "a", None),
            folder("b", "b", Some("a")),
            folder("c", "c", Some("b")),
            folder("d", "d", Some("a")),
            folder("e", "e", None),
        ]
    }

    #[test]
    fn test_single_root_from_drive_root() {
        let folders = vec![folder("r", "root", None)];
        assert_eq!(compute_subtree_ids(&folders, None), ids(&["r"]));
    }

    #[test]
    fn test_subtree_includes_start_and_descendants() {
        let folders = sample();
        let start = FolderId::from("a");
        assert_eq!(
            compute_subtree_ids(&folders, Some(&start)),
            ids(&["a", "b", "c", "d"])
        );
    }

    #[test]
    fn test_leaf_subtree_is_itself() {
        let folders = sample();
        let start = FolderId::from("c");
        assert_eq!(compute_subtree_ids(&folders, Some(&start)), ids(&["c"]));
    }

    #[test]
    fn test_drive_root_covers_all_roots() {
        let folders = sample();
        assert_eq!(
            compute_subtree_ids(&folders, None),
            ids(&["a", "b", "c", "d", "e"])
        );
    }

    #[test]
    fn test_subtree_is_closed_under_children() {
        let folders = sample();
        for start in ["a", "b", "e"] {
            let start = FolderId::from(start);
            let members = compute_subtree_ids(&folders, Some(&start));
            assert!(members.contains(&start));
            for f in &folders {
                if let Some(parent) = &f.parent_id {
                    if members.contains(parent) {
                        assert!(members.contains(&f.id), "{} missing", f.id);
                    }
                }
            }
        }
    }

    #[test]
    fn test_missing_parent_is_treated_as_root() {
        let folders = vec![
            folder("orphan", "orphan", Some("gone")),
            folder("child", "child", Some("orphan")),
        ];
        assert_eq!(
            compute_subtree_ids(&folders, None),
            ids(&["orphan", "child"])
        );
        let index = SubtreeIndex::build(&folders);
        assert_eq!(index.children_of(None).len(), 1);
    }

    #[test]
    fn test_cycle_terminates() {
        let folders = vec![
            folder("x", "x", Some("y")),
            folder("y", "y", Some("x")),
        ];
        let start = FolderId::from("x");
        assert_eq!(compute_subtree_ids(&folders, Some(&start)), ids(&["x", "y"]));
        assert!(compute_subtree_ids(&folders, None).is_empty());
    }

    #[test]
    fn test_unknown_start_yields_itself() {
        let folders = sample();
        let start = FolderId::from("nope");
        assert_eq!(compute_subtree_ids(&folders, Some(&start)), ids(&["nope"]));
    }

    #[test]
    fn test_folder_tree_depth_limit() {
        let folders = sample();
        let tree = build_folder_tree(&folders, None, Some(2));
        assert_eq!(tree.roots.len(), 2);
        assert_eq!(tree.roots[0].name, "a");
        assert_eq!(tree.roots[0].children.len(), 2);
        let b = &tree.roots[0].children[0];
        assert_eq!(b.name, "b");
        assert!(b.children.is_empty());
        assert_eq!(b.child_count, 1);
        assert_eq!(tree.total_folders, 4);
    }

    #[test]
    fn test_folder_tree_render_lines() {
        let folders = sample();
        let start = FolderId::from("a");
        let lines = build_folder_tree(&folders, Some(&start), None).render_lines();
        assert_eq!(lines, vec!["├── b/", "  ├── c/", "├── d/"]);
    }
}
