//! Folder tree structures for hierarchical display.

use serde::{Deserialize, Serialize};

use driveview_core::types::FolderId;

/// A node in a folder tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderTreeNode {
    /// Folder ID.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Depth level (0 for the top level of the tree).
    pub depth: usize,
    /// Number of direct child folders, including ones cut off by a depth limit.
    pub child_count: usize,
    /// Child folder nodes.
    pub children: Vec<FolderTreeNode>,
}

/// A folder tree rooted at a specific folder or at the drive root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderTree {
    /// The top-level node(s) of the tree.
    pub roots: Vec<FolderTreeNode>,
    /// Total number of folders materialized in the tree.
    pub total_folders: usize,
}

impl FolderTree {
    /// Render the tree as indented lines, one folder per line.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.total_folders);
        let mut stack: Vec<&FolderTreeNode> = self.roots.iter().rev().collect();
        while let Some(node) = stack.pop() {
            lines.push(format!("{}├── {}/", "  ".repeat(node.depth), node.name));
            stack.extend(node.children.iter().rev());
        }
        lines
    }
}
