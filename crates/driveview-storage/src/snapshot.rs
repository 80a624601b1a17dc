//! On-disk JSON snapshot of a drive's contents.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info};

use driveview_core::error::{AppError, ErrorKind};
use driveview_core::result::AppResult;
use driveview_entity::{FileNode, FolderNode};

/// Every folder and file of a drive, as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveSnapshot {
    #[serde(default)]
    pub folders: Vec<FolderNode>,
    #[serde(default)]
    pub files: Vec<FileNode>,
}

impl DriveSnapshot {
    /// Load a snapshot; a missing file yields an empty snapshot.
    pub async fn load(path: &Path) -> AppResult<Self> {
        let data = match fs::read(path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No snapshot found, starting empty");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read snapshot: {}", path.display()),
                    e,
                ));
            }
        };

        let snapshot: Self = serde_json::from_slice(&data)?;
        debug!(
            path = %path.display(),
            folders = snapshot.folders.len(),
            files = snapshot.files.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Write the snapshot as pretty JSON, creating parent directories.
    pub async fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create snapshot directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        let data = serde_json::to_vec_pretty(self)?;
        fs::write(path, data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write snapshot: {}", path.display()),
                e,
            )
        })?;
        info!(path = %path.display(), "Saved snapshot");
        Ok(())
    }
}
