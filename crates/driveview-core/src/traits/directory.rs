//! Directory-drop abstraction used by the local traverser.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use super::content::FileContent;
use crate::result::AppResult;

/// One entry of a dropped or picked selection.
pub enum DirectoryEntry {
    /// A regular file.
    File {
        /// File name (single path segment).
        name: String,
        /// Handle to the file's content.
        content: Arc<dyn FileContent>,
    },
    /// A directory whose children are read lazily in batches.
    Directory {
        /// Directory name (single path segment).
        name: String,
        /// Reader over the directory's direct children.
        reader: Box<dyn DirectoryReader>,
    },
}

impl DirectoryEntry {
    /// Create a file entry.
    pub fn file(name: impl Into<String>, content: Arc<dyn FileContent>) -> Self {
        Self::File {
            name: name.into(),
            content,
        }
    }

    /// Create a directory entry.
    pub fn directory(name: impl Into<String>, reader: Box<dyn DirectoryReader>) -> Self {
        Self::Directory {
            name: name.into(),
            reader,
        }
    }

    /// Return the entry name.
    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Directory { name, .. } => name,
        }
    }

    /// Return whether this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }
}

impl fmt::Debug for DirectoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { name, content } => f
                .debug_struct("File")
                .field("name", name)
                .field("size", &content.size())
                .finish(),
            Self::Directory { name, .. } => {
                f.debug_struct("Directory").field("name", name).finish()
            }
        }
    }
}

/// Reader over the direct children of one directory.
///
/// Platforms return children in bounded batches. A call that returns an
/// empty batch signals that the directory has been fully read; callers must
/// keep calling until then.
#[async_trait]
pub trait DirectoryReader: Send {
    /// Read the next batch of children.
    async fn read_entries(&mut self) -> AppResult<Vec<DirectoryEntry>>;
}
