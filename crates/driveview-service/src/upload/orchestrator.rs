//! Folder upload: recreates a relative directory structure under a remote
//! folder and uploads every file into its resolved parent.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use driveview_core::error::{AppError, ErrorKind};
use driveview_core::result::AppResult;
use driveview_core::types::FolderId;

use super::plan::{EntryPath, UploadPlan};
use super::DroppedEntry;
use crate::remote::RemoteDrive;

/// Progress notification sent after each uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadProgress {
    /// Files uploaded so far, this one included.
    pub processed: usize,
    /// Files in this upload.
    pub total: usize,
    /// Name of the file just uploaded.
    pub name: String,
}

/// Receives upload progress. Notifications are informational only.
pub trait UploadObserver: Send + Sync {
    /// Called after each file has been added.
    fn on_progress(&self, progress: &UploadProgress);
}

impl<F> UploadObserver for F
where
    F: Fn(&UploadProgress) + Send + Sync,
{
    fn on_progress(&self, progress: &UploadProgress) {
        self(progress)
    }
}

/// Optional knobs for one upload.
#[derive(Default)]
pub struct UploadOptions<'a> {
    /// Progress observer.
    pub observer: Option<&'a dyn UploadObserver>,
    /// Checked between files; once cancelled, no further calls are made.
    pub cancel: Option<CancellationToken>,
}

/// Outcome of a completed upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSummary {
    /// Number of files added.
    pub files_uploaded: usize,
    /// Number of folders created.
    pub folders_created: usize,
    /// Total bytes passed to `add_file`.
    pub bytes_uploaded: u64,
}

/// Uploads dropped selections into the remote drive.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// Remote drive.
    drive: Arc<dyn RemoteDrive>,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(drive: Arc<dyn RemoteDrive>) -> Self {
        Self { drive }
    }

    /// Upload `entries` below `target` (`None` = drive root).
    ///
    /// Entries are processed in ascending path depth. Every intermediate
    /// folder is created exactly once, before any file inside it, and
    /// remembered by its relative path so later files reuse it. Calls are
    /// issued one at a time.
    ///
    /// # Errors
    ///
    /// * `Validation` if an entry has an empty path (checked before any
    ///   remote call).
    /// * `RemoteOperation` as soon as a `create_folder` or `add_file` call
    ///   fails. Nothing is retried or rolled back: folders and files created
    ///   before the failure stay in the drive.
    /// * `Cancelled` if the cancellation token fires between two files.
    pub async fn upload_tree(
        &self,
        entries: Vec<DroppedEntry>,
        target: Option<FolderId>,
        options: UploadOptions<'_>,
    ) -> AppResult<UploadSummary> {
        if entries.is_empty() {
            info!("Nothing to upload");
            return Ok(UploadSummary::default());
        }

        let mut planned = entries
            .into_iter()
            .map(|entry| EntryPath::parse(&entry.relative_path).map(|path| (path, entry)))
            .collect::<AppResult<Vec<_>>>()?;

        // Stable: entries of equal depth keep their selection order.
        planned.sort_by_key(|(path, _)| path.depth());

        let total = planned.len();
        info!(
            files = total,
            target_folder = ?target.as_ref().map(FolderId::as_str),
            "Starting folder upload"
        );

        let mut plan = UploadPlan::new(target);
        let mut summary = UploadSummary::default();

        for (processed, (path, entry)) in planned.into_iter().enumerate() {
            if options.cancel.as_ref().is_some_and(|c| c.is_cancelled()) {
                info!(processed, total, "Upload cancelled");
                return Err(AppError::cancelled(format!(
                    "Upload cancelled after {processed} of {total} files"
                )));
            }

            let parent = self.ensure_folders(&path, &mut plan, &mut summary).await?;

            let size = entry.size();
            debug!(name = %path.leaf, size, parent = ?parent.as_ref().map(FolderId::as_str), "Adding file");
            self.drive
                .add_file(&path.leaf, size, entry.content.as_ref(), parent.as_ref())
                .await
                .map_err(|e| remote_failure(format!("Failed to add file '{}'", entry.relative_path), e))?;

            summary.files_uploaded += 1;
            summary.bytes_uploaded += size;

            if let Some(observer) = options.observer {
                observer.on_progress(&UploadProgress {
                    processed: processed + 1,
                    total,
                    name: path.leaf.clone(),
                });
            }
        }

        info!(
            files = summary.files_uploaded,
            folders = summary.folders_created,
            bytes = summary.bytes_uploaded,
            "Folder upload completed"
        );
        Ok(summary)
    }

    /// Resolve the folder chain of `path`, creating each missing folder
    /// once, and return the file's parent folder.
    async fn ensure_folders(
        &self,
        path: &EntryPath,
        plan: &mut UploadPlan,
        summary: &mut UploadSummary,
    ) -> AppResult<Option<FolderId>> {
        let mut parent: Option<FolderId> = plan.get("").flatten().cloned();

        for (key, segment) in path.folder_keys() {
            if let Some(existing) = plan.get(&key) {
                parent = existing.cloned();
                continue;
            }

            debug!(folder = %key, "Creating folder");
            let created = self
                .drive
                .create_folder(segment, parent.as_ref())
                .await
                .map_err(|e| remote_failure(format!("Failed to create folder '{key}'"), e))?;

            summary.folders_created += 1;
            plan.record(key, created.clone());
            parent = Some(created);
        }

        Ok(parent)
    }
}

fn remote_failure(context: String, cause: AppError) -> AppError {
    AppError::with_source(
        ErrorKind::RemoteOperation,
        format!("{context}: {}", cause.message),
        cause,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, RecordingDrive};
    use driveview_core::traits::MemoryFile;
    use std::sync::Mutex;

    fn entry(path: &str) -> DroppedEntry {
        DroppedEntry::new(Arc::new(MemoryFile::new(path.to_string())), path)
    }

    fn service(drive: &Arc<RecordingDrive>) -> UploadService {
        UploadService::new(drive.clone())
    }

    fn folder(name: &str, parent: Option<&str>) -> Call {
        Call::CreateFolder {
            name: name.into(),
            parent: parent.map(str::to_string),
        }
    }

    fn add(name: &str, parent: Option<&str>) -> Call {
        Call::AddFile {
            name: name.into(),
            parent: parent.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_shared_ancestor_created_once() {
        let drive = Arc::new(RecordingDrive::default());
        let entries = vec![entry("a/b/x.txt"), entry("a/c/y.txt"), entry("a/b/z.txt")];

        let summary = service(&drive)
            .upload_tree(entries, None, UploadOptions::default())
            .await
            .unwrap();

        assert_eq!(
            drive.calls(),
            vec![
                folder("a", None),
                folder("b", Some("folder-1")),
                add("x.txt", Some("folder-2")),
                folder("c", Some("folder-1")),
                add("y.txt", Some("folder-3")),
                add("z.txt", Some("folder-2")),
            ]
        );
        assert_eq!(summary.folders_created, 3);
        assert_eq!(summary.files_uploaded, 3);
    }

    #[tokio::test]
    async fn test_empty_selection_makes_no_calls() {
        let drive = Arc::new(RecordingDrive::default());
        let summary = service(&drive)
            .upload_tree(Vec::new(), None, UploadOptions::default())
            .await
            .unwrap();
        assert_eq!(summary, UploadSummary::default());
        assert!(drive.calls().is_empty());
    }

    #[tokio::test]
    async fn test_shallow_entries_processed_first() {
        let drive = Arc::new(RecordingDrive::default());
        let entries = vec![entry("d/deep.txt"), entry("top.txt")];
        service(&drive)
            .upload_tree(entries, Some(FolderId::from("target")), UploadOptions::default())
            .await
            .unwrap();

        assert_eq!(
            drive.calls(),
            vec![
                add("top.txt", Some("target")),
                folder("d", Some("target")),
                add("deep.txt", Some("folder-1")),
            ]
        );
    }

    #[tokio::test]
    async fn test_size_is_forwarded() {
        let drive = Arc::new(RecordingDrive::default());
        let summary = service(&drive)
            .upload_tree(vec![entry("abc.txt")], None, UploadOptions::default())
            .await
            .unwrap();
        assert_eq!(drive.sizes(), vec![7]);
        assert_eq!(summary.bytes_uploaded, 7);
    }

    #[tokio::test]
    async fn test_empty_path_rejected_before_any_call() {
        let drive = Arc::new(RecordingDrive::default());
        let err = service(&drive)
            .upload_tree(vec![entry("a/x"), entry("/")], None, UploadOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(drive.calls().is_empty());
    }

    #[tokio::test]
    async fn test_folder_failure_aborts_and_keeps_prior_effects() {
        let drive = Arc::new(RecordingDrive::default().fail_create_folder("b"));
        let entries = vec![entry("a/x.txt"), entry("a/b/y.txt"), entry("a/b/z.txt")];

        let err = service(&drive)
            .upload_tree(entries, None, UploadOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::RemoteOperation);
        assert!(err.message.contains("a/b"));
        assert_eq!(
            drive.calls(),
            vec![
                folder("a", None),
                add("x.txt", Some("folder-1")),
                folder("b", Some("folder-1")),
            ]
        );
    }

    #[tokio::test]
    async fn test_file_failure_aborts_remaining_entries() {
        let drive = Arc::new(RecordingDrive::default().fail_add_file("1.txt"));
        let entries = vec![entry("1.txt"), entry("2.txt")];

        let err = service(&drive)
            .upload_tree(entries, None, UploadOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::RemoteOperation);
        assert_eq!(drive.calls(), vec![add("1.txt", None)]);
    }

    #[tokio::test]
    async fn test_progress_reported_per_file() {
        let drive = Arc::new(RecordingDrive::default());
        let seen = Mutex::new(Vec::new());
        let observer = |p: &UploadProgress| seen.lock().unwrap().push(p.clone());

        service(&drive)
            .upload_tree(
                vec![entry("a/1.txt"), entry("2.txt")],
                None,
                UploadOptions {
                    observer: Some(&observer),
                    cancel: None,
                },
            )
            .await
            .unwrap();

        let seen = seen.into_inner().unwrap();
        assert_eq!(
            seen,
            vec![
                UploadProgress {
                    processed: 1,
                    total: 2,
                    name: "2.txt".into()
                },
                UploadProgress {
                    processed: 2,
                    total: 2,
                    name: "1.txt".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_cancel_between_files() {
        let drive = Arc::new(RecordingDrive::default());
        let token = CancellationToken::new();
        let cancel_after_first = {
            let token = token.clone();
            move |_: &UploadProgress| token.cancel()
        };

        let err = service(&drive)
            .upload_tree(
                vec![entry("1.txt"), entry("2.txt")],
                None,
                UploadOptions {
                    observer: Some(&cancel_after_first),
                    cancel: Some(token),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Cancelled);
        assert_eq!(drive.calls(), vec![add("1.txt", None)]);
    }
}
