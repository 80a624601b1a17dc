//! Mixed folder/file items returned by listings and search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use driveview_core::types::FolderId;

use crate::file::FileNode;
use crate::folder::FolderNode;

/// Item kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A folder. Orders before `File`.
    Folder,
    /// A file.
    File,
}

/// A folder or a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FileSystemItem {
    /// A folder entry.
    Folder(FolderNode),
    /// A file entry.
    File(FileNode),
}

impl FileSystemItem {
    /// Return the item kind.
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Folder(_) => ItemKind::Folder,
            Self::File(_) => ItemKind::File,
        }
    }

    /// Return the raw identifier string.
    pub fn id(&self) -> &str {
        match self {
            Self::Folder(folder) => folder.id.as_str(),
            Self::File(file) => file.id.as_str(),
        }
    }

    /// Return the item name.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.name,
            Self::File(file) => &file.name,
        }
    }

    /// Return the containing folder.
    pub fn parent_id(&self) -> Option<&FolderId> {
        match self {
            Self::Folder(folder) => folder.parent_id.as_ref(),
            Self::File(file) => file.parent_id.as_ref(),
        }
    }

    /// Size in bytes; folders count as zero.
    pub fn size(&self) -> u64 {
        match self {
            Self::Folder(_) => 0,
            Self::File(file) => file.size,
        }
    }

    /// Type label: `folder` for folders, the lowercase extension for files.
    pub fn type_label(&self) -> String {
        match self {
            Self::Folder(_) => "folder".to_string(),
            Self::File(file) => file.extension().unwrap_or_default(),
        }
    }

    /// Creation timestamp, if known.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Folder(folder) => folder.created_at,
            Self::File(file) => file.created_at,
        }
    }

    /// Last-modified timestamp, if known.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Folder(folder) => folder.updated_at,
            Self::File(file) => file.updated_at,
        }
    }

    /// Return whether this item is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }
}

impl From<FolderNode> for FileSystemItem {
    fn from(folder: FolderNode) -> Self {
        Self::Folder(folder)
    }
}

impl From<FileNode> for FileSystemItem {
    fn from(file: FileNode) -> Self {
        Self::File(file)
    }
}
