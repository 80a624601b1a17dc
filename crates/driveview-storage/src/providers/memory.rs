//! In-memory remote drive.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use driveview_core::error::AppError;
use driveview_core::result::AppResult;
use driveview_core::traits::FileContent;
use driveview_core::types::{FileId, FolderId};
use driveview_entity::{FileNode, FileSystemItem, FolderNode};
use driveview_service::RemoteDrive;

use crate::snapshot::DriveSnapshot;

/// A drive held entirely in memory.
///
/// Folder and file names are unique per parent. Uploaded content is read
/// once to check its size and then discarded; only metadata is kept.
#[derive(Debug, Default)]
pub struct MemoryDrive {
    state: RwLock<DriveSnapshot>,
}

impl MemoryDrive {
    /// Create an empty drive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a drive from previously captured contents.
    pub fn from_snapshot(snapshot: DriveSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
        }
    }

    /// Load a drive from a JSON snapshot file (missing file = empty drive).
    pub async fn load_snapshot(path: &Path) -> AppResult<Self> {
        Ok(Self::from_snapshot(DriveSnapshot::load(path).await?))
    }

    /// Persist the current contents to a JSON snapshot file.
    pub async fn save_snapshot(&self, path: &Path) -> AppResult<()> {
        self.snapshot().await.save(path).await
    }

    /// A copy of the current contents.
    pub async fn snapshot(&self) -> DriveSnapshot {
        self.state.read().await.clone()
    }
}

fn ensure_parent(state: &DriveSnapshot, parent_id: Option<&FolderId>) -> AppResult<()> {
    match parent_id {
        Some(id) if !state.folders.iter().any(|f| &f.id == id) => {
            Err(AppError::not_found(format!("Parent folder '{id}' not found")))
        }
        _ => Ok(()),
    }
}

fn validate_name(name: &str) -> AppResult<()> {
    if name.is_empty() || name.contains('/') {
        return Err(AppError::validation(format!("Invalid name '{name}'")));
    }
    Ok(())
}

#[async_trait]
impl RemoteDrive for MemoryDrive {
    async fn list_folders(&self) -> AppResult<Vec<FolderNode>> {
        Ok(self.state.read().await.folders.clone())
    }

    async fn list_folder_contents(
        &self,
        folder_id: Option<&FolderId>,
    ) -> AppResult<Vec<FileSystemItem>> {
        let state = self.state.read().await;
        ensure_parent(&state, folder_id)?;

        let folders = state
            .folders
            .iter()
            .filter(|f| f.parent_id.as_ref() == folder_id)
            .cloned()
            .map(FileSystemItem::from);
        let files = state
            .files
            .iter()
            .filter(|f| f.parent_id.as_ref() == folder_id)
            .cloned()
            .map(FileSystemItem::from);
        Ok(folders.chain(files).collect())
    }

    async fn search(&self, query: &str) -> AppResult<Vec<FileSystemItem>> {
        let needle = query.to_lowercase();
        let state = self.state.read().await;

        let folders = state
            .folders
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&needle))
            .cloned()
            .map(FileSystemItem::from);
        let files = state
            .files
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&needle))
            .cloned()
            .map(FileSystemItem::from);
        Ok(folders.chain(files).collect())
    }

    async fn create_folder(&self, name: &str, parent_id: Option<&FolderId>) -> AppResult<FolderId> {
        validate_name(name)?;
        let mut state = self.state.write().await;
        ensure_parent(&state, parent_id)?;

        if state
            .folders
            .iter()
            .any(|f| f.parent_id.as_ref() == parent_id && f.name == name)
        {
            return Err(AppError::conflict(format!(
                "Folder '{name}' already exists here"
            )));
        }

        let now = Utc::now();
        let mut folder = FolderNode::new(Uuid::new_v4().to_string(), name, parent_id.cloned());
        folder.created_at = Some(now);
        folder.updated_at = Some(now);
        let id = folder.id.clone();
        state.folders.push(folder);

        debug!(folder_id = %id, name, "Created folder");
        Ok(id)
    }

    async fn add_file(
        &self,
        name: &str,
        size: u64,
        content: &dyn FileContent,
        parent_id: Option<&FolderId>,
    ) -> AppResult<()> {
        validate_name(name)?;
        let data = content.read_bytes().await?;
        if data.len() as u64 != size {
            return Err(AppError::validation(format!(
                "File '{name}' declared {size} bytes but {} were read",
                data.len()
            )));
        }

        let mut state = self.state.write().await;
        ensure_parent(&state, parent_id)?;
        if state
            .files
            .iter()
            .any(|f| f.parent_id.as_ref() == parent_id && f.name == name)
        {
            return Err(AppError::conflict(format!(
                "File '{name}' already exists here"
            )));
        }

        let now = Utc::now();
        let mut file = FileNode::new(
            FileId::new(Uuid::new_v4().to_string()),
            name,
            size,
            parent_id.cloned(),
        );
        file.mime_type = mime_from_name(name);
        file.created_at = Some(now);
        file.updated_at = Some(now);
        state.files.push(file);

        debug!(name, size, "Stored file");
        Ok(())
    }
}

/// Guess a MIME type from a file name's extension.
fn mime_from_name(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    let mime = match ext.to_lowercase().as_str() {
        "txt" => "text/plain",
        "md" => "text/markdown",
        "html" | "htm" => "text/html",
        "csv" => "text/csv",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "mp3" => "audio/mpeg",
        "mp4" => "video/mp4",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        _ => return None,
    };
    Some(mime.to_string())
}
