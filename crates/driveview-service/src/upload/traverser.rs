//! Flattens a dropped selection of files and directories into
//! `(content, relative path)` pairs.

use tracing::{debug, warn};

use driveview_core::error::AppError;
use driveview_core::result::AppResult;
use driveview_core::traits::{DirectoryEntry, DirectoryReader};

use super::DroppedEntry;

/// A directory whose contents could not be read.
#[derive(Debug, Clone)]
pub struct DirectoryReadFailure {
    /// Relative path of the directory.
    pub path: String,
    /// The platform error, as a `DirectoryRead` error.
    pub error: AppError,
}

/// Result of flattening a selection.
#[derive(Debug, Default)]
pub struct TraversalReport {
    /// Collected files, in traversal order.
    pub entries: Vec<DroppedEntry>,
    /// Directories that failed to enumerate; their files are missing from
    /// `entries`.
    pub failures: Vec<DirectoryReadFailure>,
}

impl TraversalReport {
    /// Whether some directories could not be read.
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Total size of the collected files in bytes.
    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(DroppedEntry::size).sum()
    }
}

/// Flatten `entries` into files with their relative paths.
///
/// Directories are descended depth-first using an explicit stack, and each
/// directory's batches are drained to the terminating empty batch before
/// its children are visited. Sibling order is kept as the platform
/// returned it. Empty directories produce nothing. A directory that fails
/// to read is recorded in [`TraversalReport::failures`] and skipped along
/// with everything below it; its siblings are still traversed.
pub async fn extract_dropped_entries(entries: Vec<DirectoryEntry>) -> TraversalReport {
    let mut report = TraversalReport::default();

    // Popped from the end, so siblings are pushed in reverse.
    let mut stack: Vec<(String, DirectoryEntry)> = entries
        .into_iter()
        .rev()
        .map(|entry| (String::new(), entry))
        .collect();

    while let Some((base, entry)) = stack.pop() {
        match entry {
            DirectoryEntry::File { name, content } => {
                report
                    .entries
                    .push(DroppedEntry::new(content, join_path(&base, &name)));
            }
            DirectoryEntry::Directory { name, mut reader } => {
                let path = join_path(&base, &name);
                match drain_directory(reader.as_mut()).await {
                    Ok(children) => {
                        debug!(path = %path, children = children.len(), "Read directory");
                        stack.extend(
                            children
                                .into_iter()
                                .rev()
                                .map(|child| (path.clone(), child)),
                        );
                    }
                    Err(e) => {
                        warn!(path = %path, error = %e, "Skipping unreadable directory");
                        let error = AppError::directory_read(format!(
                            "Failed to read directory '{path}': {}",
                            e.message
                        ));
                        report.failures.push(DirectoryReadFailure { path, error });
                    }
                }
            }
        }
    }

    debug!(
        files = report.entries.len(),
        failures = report.failures.len(),
        "Traversal finished"
    );
    report
}

/// Read batches until the reader returns an empty one.
async fn drain_directory(reader: &mut dyn DirectoryReader) -> AppResult<Vec<DirectoryEntry>> {
    let mut children = Vec::new();
    loop {
        let batch = reader.read_entries().await?;
        if batch.is_empty() {
            return Ok(children);
        }
        children.extend(batch);
    }
}

fn join_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}/{name}")
    }
}
