//! Local selection traversal and folder upload orchestration.

pub mod orchestrator;
pub mod plan;
pub mod traverser;

use std::fmt;
use std::sync::Arc;

use driveview_core::traits::FileContent;

pub use orchestrator::{
    UploadObserver, UploadOptions, UploadProgress, UploadService, UploadSummary,
};
pub use plan::UploadPlan;
pub use traverser::{extract_dropped_entries, DirectoryReadFailure, TraversalReport};

/// A file picked for upload together with its path relative to the
/// selection root (e.g. `photos/2024/a.jpg`).
#[derive(Clone)]
pub struct DroppedEntry {
    /// Handle to the file's content.
    pub content: Arc<dyn FileContent>,
    /// `/`-joined relative path; the last segment is the file name.
    pub relative_path: String,
}

impl DroppedEntry {
    /// Create a new entry.
    pub fn new(content: Arc<dyn FileContent>, relative_path: impl Into<String>) -> Self {
        Self {
            content,
            relative_path: relative_path.into(),
        }
    }

    /// Size of the file in bytes.
    pub fn size(&self) -> u64 {
        self.content.size()
    }
}

impl fmt::Debug for DroppedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DroppedEntry")
            .field("relative_path", &self.relative_path)
            .field("size", &self.content.size())
            .finish()
    }
}

/// Split off zero-byte files.
///
/// Returns the entries to upload and the relative paths of the skipped
/// ones, so the caller can tell the user what was left out.
pub fn skip_empty_files(entries: Vec<DroppedEntry>) -> (Vec<DroppedEntry>, Vec<String>) {
    let (kept, skipped): (Vec<_>, Vec<_>) = entries.into_iter().partition(|e| e.size() > 0);
    let skipped = skipped.into_iter().map(|e| e.relative_path).collect();
    (kept, skipped)
}
