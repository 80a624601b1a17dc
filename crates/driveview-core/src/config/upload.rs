//! Upload pipeline configuration.

use serde::{Deserialize, Serialize};

/// Settings for local traversal and folder uploads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Drop zero-byte files before uploading (with a notice).
    #[serde(default = "default_true")]
    pub skip_empty_files: bool,
    /// Maximum number of entries returned by one directory batch read.
    #[serde(default = "default_read_batch_size")]
    pub read_batch_size: usize,
    /// Ask for confirmation before an upload starts.
    #[serde(default = "default_true")]
    pub confirm: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            skip_empty_files: true,
            read_batch_size: default_read_batch_size(),
            confirm: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_read_batch_size() -> usize {
    100
}
