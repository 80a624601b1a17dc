//! CLI command definitions and dispatch.

pub mod ls;
pub mod mkdir;
pub mod resolve;
pub mod search;
pub mod tree;
pub mod upload;

use std::path::Path;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use driveview_core::config::ClientConfig;
use driveview_core::error::AppError;
use driveview_storage::MemoryDrive;

use crate::output::OutputFormat;

/// Browse and upload to a DriveView drive from the terminal
#[derive(Debug, Parser)]
#[command(name = "driveview", version, about, long_about = None)]
pub struct Cli {
    /// Path to an additional configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the folder tree
    Tree(tree::TreeArgs),
    /// List a folder's contents
    Ls(ls::LsArgs),
    /// Resolve a folder path to its ID
    Resolve(resolve::ResolveArgs),
    /// Search by name
    Search(search::SearchArgs),
    /// Create a folder
    Mkdir(mkdir::MkdirArgs),
    /// Upload local files and directories
    Upload(upload::UploadArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &ClientConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Tree(args) => tree::execute(args, config, self.format).await,
            Commands::Ls(args) => ls::execute(args, config, self.format).await,
            Commands::Resolve(args) => resolve::execute(args, config, self.format).await,
            Commands::Search(args) => search::execute(args, config, self.format).await,
            Commands::Mkdir(args) => mkdir::execute(args, config, self.format).await,
            Commands::Upload(args) => upload::execute(args, config, self.format).await,
        }
    }
}

/// Helper: load the drive from its snapshot file
pub async fn open_drive(config: &ClientConfig) -> Result<Arc<MemoryDrive>, AppError> {
    let drive = MemoryDrive::load_snapshot(Path::new(&config.drive.snapshot_path)).await?;
    Ok(Arc::new(drive))
}

/// Helper: persist the drive back to its snapshot file
pub async fn save_drive(drive: &MemoryDrive, config: &ClientConfig) -> Result<(), AppError> {
    drive
        .save_snapshot(Path::new(&config.drive.snapshot_path))
        .await
}
