//! Folder listing command.

use clap::Args;

use driveview_core::config::ClientConfig;
use driveview_core::error::AppError;
use driveview_core::types::{SortDirection, SortField};
use driveview_service::BrowseService;

use crate::output::{self, OutputFormat};

/// Arguments for the ls command
#[derive(Debug, Args)]
pub struct LsArgs {
    /// Folder path (drive root if omitted)
    #[arg(default_value = "")]
    pub path: String,

    /// Sort field: name, size, type, created, updated
    #[arg(short, long, default_value = "name")]
    pub sort: SortField,

    /// Sort descending
    #[arg(short, long)]
    pub desc: bool,
}

/// Execute the ls command
pub async fn execute(
    args: &LsArgs,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let drive = super::open_drive(config).await?;
    let direction = if args.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };

    let mut listing = BrowseService::new(drive)
        .list(&args.path, args.sort, direction)
        .await?;
    listing.breadcrumbs = listing.breadcrumbs.with_root_name(&config.drive.root_name);

    match format {
        OutputFormat::Table => {
            println!("{}", listing.breadcrumbs.display_string());
            output::print_list(&output::item_rows(&listing.items), format);
        }
        OutputFormat::Json => output::print_json(&listing),
    }

    Ok(())
}
