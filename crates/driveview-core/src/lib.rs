//! # driveview-core
//!
//! Core crate for DriveView. Contains the platform traits consumed by the
//! upload pipeline, configuration schemas, typed identifiers, sorting
//! types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DriveView crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
