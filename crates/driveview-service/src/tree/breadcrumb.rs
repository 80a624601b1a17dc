//! Breadcrumb construction and slash-path resolution over a folder snapshot.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use driveview_core::error::AppError;
use driveview_core::result::AppResult;
use driveview_core::types::FolderId;
use driveview_entity::{BreadcrumbPath, BreadcrumbSegment, FolderNode};

/// Build the root-first breadcrumb path for `folder_id` (`None` = root).
///
/// Walks `parent_id` links upward. The walk stops at the drive root, at a
/// parent missing from the snapshot (the partial path is returned), or at
/// an already-visited folder, so cyclic input terminates. The result
/// always starts with the drive root segment.
pub fn build_breadcrumb_path(
    folder_id: Option<&FolderId>,
    all_folders: &[FolderNode],
) -> BreadcrumbPath {
    let mut by_id: HashMap<&str, &FolderNode> = HashMap::with_capacity(all_folders.len());
    for folder in all_folders {
        by_id.entry(folder.id.as_str()).or_insert(folder);
    }

    let mut segments = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = folder_id.map(FolderId::as_str);

    while let Some(id) = current {
        if !visited.insert(id) {
            debug!(folder_id = id, "Cycle in folder ancestry, truncating breadcrumb");
            break;
        }
        let Some(folder) = by_id.get(id) else {
            debug!(folder_id = id, "Folder missing from listing, truncating breadcrumb");
            break;
        };
        segments.push(BreadcrumbSegment {
            id: Some(folder.id.clone()),
            name: folder.name.clone(),
        });
        current = folder.parent_id.as_ref().map(FolderId::as_str);
    }

    segments.reverse();
    BreadcrumbPath::from_folders(segments)
}

/// Resolve a slash-separated folder path to a folder ID.
///
/// Empty segments are ignored, so `""`, `"/"` and `"//"` all resolve to
/// the drive root (`Ok(None)`). Names match exactly and case-sensitively.
/// When several siblings share a name the first one in the snapshot wins.
///
/// # Errors
///
/// Returns a `NotFound` error naming the first segment that has no match
/// under the folder resolved so far.
pub fn resolve_path_segment(path: &str, all_folders: &[FolderNode]) -> AppResult<Option<FolderId>> {
    let mut resolved: Option<&FolderId> = None;
    let mut walked: Vec<&str> = Vec::new();

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        let mut candidates = all_folders
            .iter()
            .filter(|f| f.name == segment && f.parent_id.as_ref() == resolved);

        let Some(found) = candidates.next() else {
            return Err(AppError::not_found(format!(
                "Folder '{segment}' not found under '/{}'",
                walked.join("/")
            )));
        };
        if candidates.next().is_some() {
            debug!(
                segment,
                folder_id = %found.id,
                "Multiple folders share this name, using the first"
            );
        }

        resolved = Some(&found.id);
        walked.push(segment);
    }

    Ok(resolved.cloned())
}
