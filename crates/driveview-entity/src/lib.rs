//! # driveview-entity
//!
//! Domain models for DriveView. Every struct in this crate is a value
//! returned by (or derived from) the remote drive's flat listings. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod breadcrumb;
pub mod file;
pub mod folder;
pub mod item;

pub use breadcrumb::{BreadcrumbPath, BreadcrumbSegment};
pub use file::FileNode;
pub use folder::{FolderNode, FolderTree, FolderTreeNode};
pub use item::{FileSystemItem, ItemKind};
