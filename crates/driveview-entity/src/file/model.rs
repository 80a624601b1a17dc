//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use driveview_core::types::{FileId, FolderId};

/// A file as returned by the remote drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    /// Remote-assigned file identifier.
    pub id: FileId,
    /// The file name (including extension).
    pub name: String,
    /// File size in bytes.
    pub size: u64,
    /// The folder containing this file (`None` for the drive root).
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    /// MIME type of the file, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// When the file was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the file was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl FileNode {
    /// Create a file node without optional metadata.
    pub fn new(
        id: impl Into<FileId>,
        name: impl Into<String>,
        size: u64,
        parent_id: Option<FolderId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size,
            parent_id,
            mime_type: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }
}
