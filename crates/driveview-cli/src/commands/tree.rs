//! Folder tree command.

use clap::Args;

use driveview_core::config::ClientConfig;
use driveview_core::error::AppError;
use driveview_service::TreeService;

use crate::output::{self, OutputFormat};

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Folder path to start from (drive root if omitted)
    #[arg(default_value = "")]
    pub path: String,

    /// Maximum depth below the start folder
    #[arg(short, long)]
    pub depth: Option<usize>,
}

/// Execute the tree command
pub async fn execute(
    args: &TreeArgs,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let drive = super::open_drive(config).await?;
    let service = TreeService::new(drive);

    let (_, breadcrumbs) = service.locate(&args.path).await?;
    let breadcrumbs = breadcrumbs.with_root_name(&config.drive.root_name);
    let tree = service.get_tree(&args.path, args.depth).await?;

    match format {
        OutputFormat::Table => {
            println!("{}", breadcrumbs.display_string());
            for line in tree.render_lines() {
                println!("{line}");
            }
            println!();
            output::print_kv("Folders", &tree.total_folders.to_string());
        }
        OutputFormat::Json => output::print_json(&tree),
    }

    Ok(())
}
