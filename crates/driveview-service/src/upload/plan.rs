//! Relative-path bookkeeping for one upload.

use std::collections::HashMap;

use driveview_core::error::AppError;
use driveview_core::result::AppResult;
use driveview_core::types::FolderId;

/// Memo of relative folder paths already resolved to remote folders.
///
/// Seeded with the empty path mapped to the upload target. Entries are
/// only ever added, never replaced or removed, and the plan is dropped
/// when the upload ends.
#[derive(Debug, Clone)]
pub struct UploadPlan {
    folders: HashMap<String, Option<FolderId>>,
}

impl UploadPlan {
    /// Create a plan rooted at `target` (`None` = drive root).
    pub fn new(target: Option<FolderId>) -> Self {
        let mut folders = HashMap::new();
        folders.insert(String::new(), target);
        Self { folders }
    }

    /// Look up the remote folder for a relative path key.
    ///
    /// The outer `Option` is `None` when the path is not planned yet; the
    /// inner one is `None` for the drive root.
    pub fn get(&self, key: &str) -> Option<Option<&FolderId>> {
        self.folders.get(key).map(Option::as_ref)
    }

    /// Record a newly created folder. An existing key is left untouched.
    pub fn record(&mut self, key: String, id: FolderId) {
        self.folders.entry(key).or_insert(Some(id));
    }

    /// Number of planned paths, the target included.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Always false: the target path is always present.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

/// A relative path split into its folder chain and file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPath {
    /// Folder segments, outermost first.
    pub folders: Vec<String>,
    /// The file name.
    pub leaf: String,
}

impl EntryPath {
    /// Split a `/`-separated relative path, ignoring empty segments.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error when the path has no segments at all.
    pub fn parse(relative_path: &str) -> AppResult<Self> {
        let mut segments: Vec<String> = relative_path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let leaf = segments.pop().ok_or_else(|| {
            AppError::validation(format!("Upload entry has an empty path: '{relative_path}'"))
        })?;

        Ok(Self {
            folders: segments,
            leaf,
        })
    }

    /// Number of segments, the file name included.
    pub fn depth(&self) -> usize {
        self.folders.len() + 1
    }

    /// Cumulative folder keys with the segment each one adds:
    /// `a/b` yields `("a", "a")` then `("a/b", "b")`.
    pub fn folder_keys(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.folders.iter().scan(String::new(), |key, segment| {
            if !key.is_empty() {
                key.push('/');
            }
            key.push_str(segment);
            Some((key.clone(), segment.as_str()))
        })
    }
}
