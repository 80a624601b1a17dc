//! Sorted folder listings with a breadcrumb trail.

use std::sync::Arc;

use serde::Serialize;

use driveview_core::result::AppResult;
use driveview_core::types::{SortDirection, SortField};
use driveview_entity::{BreadcrumbPath, FileSystemItem};

use crate::remote::RemoteDrive;
use crate::sort::sort_items;
use crate::tree::{build_breadcrumb_path, resolve_path_segment};

/// The contents of one folder, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct FolderListing {
    /// Trail from the root to the listed folder.
    pub breadcrumbs: BreadcrumbPath,
    /// Direct children, sorted.
    pub items: Vec<FileSystemItem>,
}

/// Lists folder contents by path.
#[derive(Debug, Clone)]
pub struct BrowseService {
    drive: Arc<dyn RemoteDrive>,
}

impl BrowseService {
    pub fn new(drive: Arc<dyn RemoteDrive>) -> Self {
        Self { drive }
    }

    /// Lists the folder at `path` (empty for the root).
    pub async fn list(
        &self,
        path: &str,
        field: SortField,
        direction: SortDirection,
    ) -> AppResult<FolderListing> {
        let folders = self.drive.list_folders().await?;
        let folder_id = resolve_path_segment(path, &folders)?;
        let breadcrumbs = build_breadcrumb_path(folder_id.as_ref(), &folders);

        let contents = self.drive.list_folder_contents(folder_id.as_ref()).await?;
        Ok(FolderListing {
            breadcrumbs,
            items: sort_items(&contents, field, direction),
        })
    }
}
