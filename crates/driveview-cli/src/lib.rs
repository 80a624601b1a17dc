//! # driveview-cli
//!
//! Command definitions and output formatting for the `driveview` binary.

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::OutputFormat;
