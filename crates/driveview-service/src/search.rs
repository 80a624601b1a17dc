//! Name search, optionally restricted to a folder subtree.

use std::sync::Arc;

use tracing::debug;

use driveview_core::error::AppError;
use driveview_core::result::AppResult;
use driveview_core::types::{FolderId, SortDirection, SortField};
use driveview_entity::FileSystemItem;

use crate::remote::RemoteDrive;
use crate::sort::sort_items;
use crate::tree::compute_subtree_ids;

/// Searches the remote drive by name.
#[derive(Debug, Clone)]
pub struct SearchService {
    drive: Arc<dyn RemoteDrive>,
}

impl SearchService {
    /// Creates a new search service.
    pub fn new(drive: Arc<dyn RemoteDrive>) -> Self {
        Self { drive }
    }

    /// Searches for items matching `query`.
    ///
    /// With a `scope`, only items whose parent lies inside that folder's
    /// subtree are kept. Results are ordered by name.
    pub async fn search(
        &self,
        query: &str,
        scope: Option<&FolderId>,
    ) -> AppResult<Vec<FileSystemItem>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::validation("Search query must not be empty"));
        }

        let hits = self.drive.search(query).await?;
        let hits = match scope {
            None => hits,
            Some(scope) => {
                let folders = self.drive.list_folders().await?;
                let allowed = compute_subtree_ids(&folders, Some(scope));
                hits.into_iter()
                    .filter(|item| item.parent_id().is_some_and(|p| allowed.contains(p)))
                    .collect()
            }
        };

        debug!(query, results = hits.len(), "Search complete");
        Ok(sort_items(&hits, SortField::Name, SortDirection::Asc))
    }
}
