//! # driveview-service
//!
//! Client-side logic for DriveView. Reconstructs and queries tree structure
//! from the remote drive's flat listings, and turns a local file selection
//! into an ordered sequence of remote calls.
//!
//! Every service consumes the remote drive through the [`RemoteDrive`]
//! trait, so the same code runs against a real backend or the in-memory
//! stand-in in `driveview-storage`.

pub mod browse;
pub mod remote;
pub mod search;
pub mod sort;
pub mod tree;
pub mod upload;

pub use browse::{BrowseService, FolderListing};
pub use remote::RemoteDrive;
pub use search::SearchService;
pub use sort::sort_items;
pub use tree::{
    build_breadcrumb_path, build_folder_tree, compute_subtree_ids, resolve_path_segment,
    SubtreeIndex, TreeService,
};
pub use upload::{
    extract_dropped_entries, skip_empty_files, DroppedEntry, TraversalReport, UploadObserver,
    UploadOptions, UploadProgress, UploadService, UploadSummary,
};

#[cfg(test)]
pub(crate) mod testing;
