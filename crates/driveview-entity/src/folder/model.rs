//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use driveview_core::types::FolderId;

/// A folder as returned by the remote drive's flat folder listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderNode {
    /// Remote-assigned folder identifier.
    pub id: FolderId,
    /// Folder name (any string; not unique among siblings).
    pub name: String,
    /// Parent folder ID (`None` for root folders).
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    /// When the folder was created, if the remote reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the folder was last updated, if the remote reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl FolderNode {
    /// Create a folder node without timestamps.
    pub fn new(id: impl Into<FolderId>, name: impl Into<String>, parent_id: Option<FolderId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id,
            created_at: None,
            updated_at: None,
        }
    }
}
