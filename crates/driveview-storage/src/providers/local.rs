//! Local filesystem adapters for the upload traverser.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use driveview_core::error::{AppError, ErrorKind};
use driveview_core::result::AppResult;
use driveview_core::traits::{DirectoryEntry, DirectoryReader, FileContent};

/// A file on the local disk, read lazily when uploaded.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    size: u64,
}

impl LocalFile {
    /// Create a handle for a file whose size is already known.
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }
}

#[async_trait]
impl FileContent for LocalFile {
    fn size(&self) -> u64 {
        self.size
    }

    async fn read_bytes(&self) -> AppResult<Bytes> {
        let data = fs::read(&self.path)
            .await
            .map_err(|e| map_io(e, "Failed to read file", &self.path))?;
        Ok(Bytes::from(data))
    }
}

/// Reads a local directory in batches of at most `batch_size` entries.
///
/// The underlying `ReadDir` is opened on the first call, so a directory
/// that cannot be opened reports the failure from `read_entries`. Symbolic
/// links are skipped. Once the directory is exhausted every further call
/// returns an empty batch.
#[derive(Debug)]
pub struct LocalDirectoryReader {
    path: PathBuf,
    batch_size: usize,
    inner: Option<fs::ReadDir>,
    exhausted: bool,
}

impl LocalDirectoryReader {
    /// Create a reader for the directory at `path`.
    pub fn new(path: impl Into<PathBuf>, batch_size: usize) -> Self {
        Self {
            path: path.into(),
            batch_size: batch_size.max(1),
            inner: None,
            exhausted: false,
        }
    }
}

async fn convert_entry(
    entry: fs::DirEntry,
    batch_size: usize,
) -> AppResult<Option<DirectoryEntry>> {
    let path = entry.path();
    let file_type = entry
        .file_type()
        .await
        .map_err(|e| map_io(e, "Failed to inspect entry", &path))?;
    let name = entry.file_name().to_string_lossy().into_owned();

    if file_type.is_symlink() {
        debug!(path = %path.display(), "Skipping symbolic link");
        Ok(None)
    } else if file_type.is_dir() {
        let reader = LocalDirectoryReader::new(path, batch_size);
        Ok(Some(DirectoryEntry::directory(name, Box::new(reader))))
    } else {
        let meta = entry
            .metadata()
            .await
            .map_err(|e| map_io(e, "Failed to stat file", &path))?;
        let file = LocalFile::new(path, meta.len());
        Ok(Some(DirectoryEntry::file(name, Arc::new(file))))
    }
}

#[async_trait]
impl DirectoryReader for LocalDirectoryReader {
    async fn read_entries(&mut self) -> AppResult<Vec<DirectoryEntry>> {
        if self.exhausted {
            return Ok(Vec::new());
        }

        let mut read_dir = match self.inner.take() {
            Some(read_dir) => read_dir,
            None => fs::read_dir(&self.path)
                .await
                .map_err(|e| map_io(e, "Failed to open directory", &self.path))?,
        };

        let mut batch = Vec::with_capacity(self.batch_size);
        while batch.len() < self.batch_size {
            let next = read_dir
                .next_entry()
                .await
                .map_err(|e| map_io(e, "Failed to read directory", &self.path))?;
            match next {
                Some(entry) => {
                    if let Some(converted) = convert_entry(entry, self.batch_size).await? {
                        batch.push(converted);
                    }
                }
                None => {
                    self.exhausted = true;
                    break;
                }
            }
        }

        if !self.exhausted {
            self.inner = Some(read_dir);
        }
        debug!(path = %self.path.display(), count = batch.len(), "Read directory batch");
        Ok(batch)
    }
}

/// Open a user-selected local path as a top-level [`DirectoryEntry`].
///
/// The entry is named after the last path component. Unlike entries found
/// during traversal, an explicitly selected symbolic link is followed.
pub async fn open_local_entry(
    path: impl AsRef<Path>,
    batch_size: usize,
) -> AppResult<DirectoryEntry> {
    let path = fs::canonicalize(path.as_ref())
        .await
        .map_err(|e| map_io(e, "Failed to resolve path", path.as_ref()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            AppError::validation(format!("Cannot upload '{}': path has no name", path.display()))
        })?;

    let meta = fs::metadata(&path)
        .await
        .map_err(|e| map_io(e, "Failed to stat path", &path))?;
    if meta.is_dir() {
        Ok(DirectoryEntry::directory(
            name,
            Box::new(LocalDirectoryReader::new(path, batch_size)),
        ))
    } else {
        Ok(DirectoryEntry::file(name, Arc::new(LocalFile::new(path, meta.len()))))
    }
}

fn map_io(err: std::io::Error, context: &str, path: &Path) -> AppError {
    if err.kind() == std::io::ErrorKind::NotFound {
        AppError::not_found(format!("{context}: {} does not exist", path.display()))
    } else {
        AppError::with_source(
            ErrorKind::Storage,
            format!("{context}: {}", path.display()),
            err,
        )
    }
}
