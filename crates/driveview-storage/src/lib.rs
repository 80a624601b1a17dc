//! # driveview-storage
//!
//! Storage adapters for DriveView: an in-memory [`RemoteDrive`] that can be
//! persisted to a JSON snapshot, and readers that expose the local
//! filesystem through the directory traits in `driveview-core`.
//!
//! [`RemoteDrive`]: driveview_service::RemoteDrive

pub mod providers;
pub mod snapshot;

pub use providers::local::{open_local_entry, LocalDirectoryReader, LocalFile};
pub use providers::memory::MemoryDrive;
pub use snapshot::DriveSnapshot;
