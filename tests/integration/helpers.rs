//! Shared test helpers for integration tests.

use std::path::Path;
use std::sync::Arc;

use driveview_core::traits::DirectoryEntry;
use driveview_core::types::FolderId;
use driveview_entity::FolderNode;
use driveview_storage::{open_local_entry, DriveSnapshot, MemoryDrive};

/// Write `files` (relative path, contents) below `root`, creating directories.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, contents) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, contents).expect("write file");
    }
}

/// Open local paths as a top-level selection.
pub async fn open_selection(paths: &[&Path], batch_size: usize) -> Vec<DirectoryEntry> {
    let mut selection = Vec::new();
    for path in paths {
        selection.push(
            open_local_entry(path, batch_size)
                .await
                .expect("open local entry"),
        );
    }
    selection
}

/// A drive pre-populated with `(id, name, parent)` folders.
pub fn drive_with_folders(folders: &[(&str, &str, Option<&str>)]) -> Arc<MemoryDrive> {
    let snapshot = DriveSnapshot {
        folders: folders
            .iter()
            .map(|(id, name, parent)| FolderNode::new(*id, *name, parent.map(FolderId::from)))
            .collect(),
        files: Vec::new(),
    };
    Arc::new(MemoryDrive::from_snapshot(snapshot))
}
