//! The remote drive seam.

use async_trait::async_trait;

use driveview_core::result::AppResult;
use driveview_core::traits::FileContent;
use driveview_core::types::FolderId;
use driveview_entity::{FileSystemItem, FolderNode};

/// Flat, ID-addressed primitives exposed by the remote drive.
///
/// The drive owns all folder and file records; every call returns a fresh
/// snapshot and the client keeps no authoritative copy between calls.
/// Implementations make no promise of server-side deduplication:
/// [`UploadService`](crate::upload::UploadService) is responsible for
/// calling `create_folder` at most once per distinct folder path.
#[async_trait]
pub trait RemoteDrive: Send + Sync + std::fmt::Debug + 'static {
    /// List every folder in the drive (no pagination).
    async fn list_folders(&self) -> AppResult<Vec<FolderNode>>;

    /// List the direct children (folders and files) of a folder, or of the
    /// drive root when `folder_id` is `None`.
    async fn list_folder_contents(
        &self,
        folder_id: Option<&FolderId>,
    ) -> AppResult<Vec<FileSystemItem>>;

    /// Search folders and files by name across the whole drive.
    async fn search(&self, query: &str) -> AppResult<Vec<FileSystemItem>>;

    /// Create a folder and return its new identifier.
    async fn create_folder(&self, name: &str, parent_id: Option<&FolderId>) -> AppResult<FolderId>;

    /// Add a file under the given folder.
    async fn add_file(
        &self,
        name: &str,
        size: u64,
        content: &dyn FileContent,
        parent_id: Option<&FolderId>,
    ) -> AppResult<()>;
}
