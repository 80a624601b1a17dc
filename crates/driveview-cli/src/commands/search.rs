//! Search command.

use clap::Args;

use driveview_core::config::ClientConfig;
use driveview_core::error::AppError;
use driveview_service::{SearchService, TreeService};

use crate::output::{self, OutputFormat};

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for in names (case-insensitive)
    pub query: String,

    /// Only search below this folder path
    #[arg(short, long = "in")]
    pub scope: Option<String>,
}

/// Execute the search command
pub async fn execute(
    args: &SearchArgs,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let drive = super::open_drive(config).await?;

    let scope = match &args.scope {
        Some(path) => TreeService::new(drive.clone()).resolve_path(path).await?,
        None => None,
    };
    let hits = SearchService::new(drive)
        .search(&args.query, scope.as_ref())
        .await?;

    output::print_list(&output::item_rows(&hits), format);
    Ok(())
}
