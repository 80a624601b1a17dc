//! Path resolution command.

use clap::Args;
use serde::Serialize;

use driveview_core::config::ClientConfig;
use driveview_core::error::AppError;
use driveview_core::types::FolderId;
use driveview_entity::BreadcrumbPath;
use driveview_service::TreeService;

use crate::output::{self, OutputFormat};

/// Arguments for the resolve command
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Slash-separated folder path, e.g. `docs/2024`
    pub path: String,
}

#[derive(Debug, Serialize)]
struct Resolved {
    id: Option<FolderId>,
    breadcrumbs: BreadcrumbPath,
}

/// Execute the resolve command
pub async fn execute(
    args: &ResolveArgs,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let drive = super::open_drive(config).await?;
    let (id, breadcrumbs) = TreeService::new(drive).locate(&args.path).await?;
    let breadcrumbs = breadcrumbs.with_root_name(&config.drive.root_name);

    match format {
        OutputFormat::Table => {
            let id = id.as_ref().map_or("(root)", FolderId::as_str);
            output::print_kv("Folder ID", id);
            output::print_kv("Path", &breadcrumbs.display_string());
        }
        OutputFormat::Json => output::print_json(&Resolved { id, breadcrumbs }),
    }

    Ok(())
}
