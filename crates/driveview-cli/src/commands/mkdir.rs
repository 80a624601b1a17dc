//! Folder creation command.

use clap::Args;
use serde_json::json;

use driveview_core::config::ClientConfig;
use driveview_core::error::AppError;
use driveview_service::{RemoteDrive, TreeService};

use crate::output::{self, OutputFormat};

/// Arguments for the mkdir command
#[derive(Debug, Args)]
pub struct MkdirArgs {
    /// Name of the new folder
    pub name: String,

    /// Parent folder path (drive root if omitted)
    #[arg(short, long, default_value = "")]
    pub parent: String,
}

/// Execute the mkdir command
pub async fn execute(
    args: &MkdirArgs,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let drive = super::open_drive(config).await?;
    let parent = TreeService::new(drive.clone())
        .resolve_path(&args.parent)
        .await?;

    let id = drive.create_folder(&args.name, parent.as_ref()).await?;
    super::save_drive(&drive, config).await?;

    match format {
        OutputFormat::Table => {
            output::print_success(&format!("Folder '{}' created (id: {})", args.name, id));
        }
        OutputFormat::Json => output::print_json(&json!({ "id": id, "name": args.name })),
    }
    Ok(())
}
