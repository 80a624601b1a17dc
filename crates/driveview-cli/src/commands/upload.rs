//! Folder upload CLI command.

use std::path::PathBuf;

use clap::Args;
use dialoguer::Confirm;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use driveview_core::config::ClientConfig;
use driveview_core::error::AppError;
use driveview_service::{
    extract_dropped_entries, skip_empty_files, TreeService, UploadOptions, UploadProgress,
    UploadService,
};
use driveview_storage::open_local_entry;

use crate::output::{self, OutputFormat};

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Local files or directories to upload
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Destination folder path (drive root if omitted)
    #[arg(short, long, default_value = "")]
    pub to: String,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the upload command
pub async fn execute(
    args: &UploadArgs,
    config: &ClientConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let drive = super::open_drive(config).await?;
    let (target, breadcrumbs) = TreeService::new(drive.clone()).locate(&args.to).await?;

    let mut selection = Vec::with_capacity(args.paths.len());
    for path in &args.paths {
        selection.push(open_local_entry(path, config.upload.read_batch_size).await?);
    }

    let report = extract_dropped_entries(selection).await;
    for failure in &report.failures {
        output::print_warning(&format!(
            "Could not read '{}': {}",
            failure.path, failure.error.message
        ));
    }

    let mut entries = report.entries;
    if config.upload.skip_empty_files {
        let (kept, skipped) = skip_empty_files(entries);
        if !skipped.is_empty() {
            output::print_warning(&format!(
                "Skipping {} empty file(s): {}",
                skipped.len(),
                skipped.join(", ")
            ));
        }
        entries = kept;
    }

    if entries.is_empty() {
        output::print_warning("Nothing to upload");
        return Ok(());
    }

    let destination = breadcrumbs
        .with_root_name(&config.drive.root_name)
        .display_string();
    let total_bytes: u64 = entries.iter().map(|e| e.size()).sum();
    if config.upload.confirm && !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Upload {} file(s) ({} bytes) to '{}'?",
                entries.len(),
                total_bytes,
                destination
            ))
            .default(true)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;
        if !confirmed {
            output::print_warning("Upload aborted");
            return Ok(());
        }
    }

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after the current file");
            on_interrupt.cancel();
        }
    });

    let show_progress = format == OutputFormat::Table;
    let observer = move |progress: &UploadProgress| {
        if show_progress {
            println!("[{}/{}] {}", progress.processed, progress.total, progress.name);
        }
    };

    let result = UploadService::new(drive.clone())
        .upload_tree(
            entries,
            target,
            UploadOptions {
                observer: Some(&observer),
                cancel: Some(cancel.clone()),
            },
        )
        .await;
    cancel.cancel();

    // Folders and files created before a failure stay on the drive.
    super::save_drive(&drive, config).await?;
    let summary = result?;

    match format {
        OutputFormat::Table => {
            output::print_success(&format!("Uploaded to '{destination}'"));
            output::print_kv("Files", &summary.files_uploaded.to_string());
            output::print_kv("Folders created", &summary.folders_created.to_string());
            output::print_kv("Bytes", &summary.bytes_uploaded.to_string());
        }
        OutputFormat::Json => output::print_json(&summary),
    }
    Ok(())
}
