//! Platform traits defined in `driveview-core` and implemented by other crates.

pub mod content;
pub mod directory;

pub use content::{FileContent, MemoryFile};
pub use directory::{DirectoryEntry, DirectoryReader};
