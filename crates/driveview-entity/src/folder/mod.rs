//! Folder domain entities.

pub mod model;
pub mod tree;

pub use model::FolderNode;
pub use tree::{FolderTree, FolderTreeNode};
