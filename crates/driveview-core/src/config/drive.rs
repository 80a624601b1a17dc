//! Remote drive configuration.

use serde::{Deserialize, Serialize};

/// Settings for the drive the client talks to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveConfig {
    /// Path of the JSON snapshot backing the local drive stand-in.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
    /// Display name of the root folder in breadcrumbs and trees.
    #[serde(default = "default_root_name")]
    pub root_name: String,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            root_name: default_root_name(),
        }
    }
}

fn default_snapshot_path() -> String {
    "data/drive.json".to_string()
}

fn default_root_name() -> String {
    "Drive".to_string()
}
