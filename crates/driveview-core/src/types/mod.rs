//! Core type definitions used across the DriveView workspace.

pub mod id;
pub mod sorting;

pub use id::*;
pub use sorting::{SortDirection, SortField};
