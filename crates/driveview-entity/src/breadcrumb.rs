//! Breadcrumb paths from the drive root to a folder.

use serde::{Deserialize, Serialize};

use driveview_core::error::AppError;
use driveview_core::types::FolderId;

/// Default display name of the synthetic root segment.
pub const ROOT_NAME: &str = "Drive";

/// One segment of a breadcrumb path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbSegment {
    /// Folder ID (`None` for the drive root).
    pub id: Option<FolderId>,
    /// Folder name.
    pub name: String,
}

impl BreadcrumbSegment {
    /// The synthetic drive root segment.
    pub fn root() -> Self {
        Self {
            id: None,
            name: ROOT_NAME.to_string(),
        }
    }
}

/// A root-first sequence of segments ending at the target folder.
///
/// Always non-empty: the first segment is the drive root. Deserialization
/// rejects sequences that do not start with a root segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<BreadcrumbSegment>", try_from = "Vec<BreadcrumbSegment>")]
pub struct BreadcrumbPath(Vec<BreadcrumbSegment>);

impl TryFrom<Vec<BreadcrumbSegment>> for BreadcrumbPath {
    type Error = AppError;

    fn try_from(segments: Vec<BreadcrumbSegment>) -> Result<Self, Self::Error> {
        match segments.first() {
            Some(root) if root.id.is_none() => Ok(Self(segments)),
            Some(_) => Err(AppError::validation(
                "Breadcrumb path must start at the drive root",
            )),
            None => Err(AppError::validation("Breadcrumb path must not be empty")),
        }
    }
}

impl From<BreadcrumbPath> for Vec<BreadcrumbSegment> {
    fn from(path: BreadcrumbPath) -> Self {
        path.0
    }
}

impl BreadcrumbPath {
    /// Build a path from folder segments ordered root-first (excluding the
    /// drive root, which is added here).
    pub fn from_folders(folders: Vec<BreadcrumbSegment>) -> Self {
        let mut segments = Vec::with_capacity(folders.len() + 1);
        segments.push(BreadcrumbSegment::root());
        segments.extend(folders);
        Self(segments)
    }

    /// Rename the root segment, e.g. to the configured drive name.
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        if let Some(root) = self.0.first_mut() {
            root.name = name.into();
        }
        self
    }

    /// Return all segments, root first.
    pub fn segments(&self) -> &[BreadcrumbSegment] {
        &self.0
    }

    /// Return the last segment (the target folder, or the root).
    pub fn target(&self) -> &BreadcrumbSegment {
        // Non-empty by construction.
        &self.0[self.0.len() - 1]
    }

    /// Number of segments, root included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: the root segment is always present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the non-root segment names joined by `/`.
    ///
    /// The root path renders as the empty string.
    pub fn path_string(&self) -> String {
        self.0
            .iter()
            .skip(1)
            .map(|segment| segment.name.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Render the full path for display, e.g. `Drive / a / b`.
    pub fn display_string(&self) -> String {
        self.0
            .iter()
            .map(|segment| segment.name.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}
