//! Folder tree building and path resolution.

pub mod breadcrumb;
pub mod index;

use std::sync::Arc;

use driveview_core::result::AppResult;
use driveview_core::types::FolderId;
use driveview_entity::{BreadcrumbPath, FolderTree};

use crate::remote::RemoteDrive;

pub use breadcrumb::{build_breadcrumb_path, resolve_path_segment};
pub use index::{build_folder_tree, compute_subtree_ids, SubtreeIndex};

/// Builds folder trees and resolves paths against a fresh folder listing.
#[derive(Debug, Clone)]
pub struct TreeService {
    /// Remote drive.
    drive: Arc<dyn RemoteDrive>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(drive: Arc<dyn RemoteDrive>) -> Self {
        Self { drive }
    }

    /// Builds the folder tree below the folder at `path`.
    pub async fn get_tree(&self, path: &str, max_depth: Option<usize>) -> AppResult<FolderTree> {
        let folders = self.drive.list_folders().await?;
        let start = resolve_path_segment(path, &folders)?;
        Ok(build_folder_tree(&folders, start.as_ref(), max_depth))
    }

    /// Resolves a path string to a folder ID (`None` for the root).
    pub async fn resolve_path(&self, path: &str) -> AppResult<Option<FolderId>> {
        let folders = self.drive.list_folders().await?;
        resolve_path_segment(path, &folders)
    }

    /// Gets the breadcrumb trail from the root to the given folder.
    pub async fn get_breadcrumbs(&self, folder_id: Option<&FolderId>) -> AppResult<BreadcrumbPath> {
        let folders = self.drive.list_folders().await?;
        Ok(build_breadcrumb_path(folder_id, &folders))
    }

    /// Resolves a path and returns both its folder ID and breadcrumb trail
    /// from a single listing.
    pub async fn locate(&self, path: &str) -> AppResult<(Option<FolderId>, BreadcrumbPath)> {
        let folders = self.drive.list_folders().await?;
        let id = resolve_path_segment(path, &folders)?;
        let breadcrumbs = build_breadcrumb_path(id.as_ref(), &folders);
        Ok((id, breadcrumbs))
    }
}
