//! End-to-end upload: local directory traversal into an in-memory drive.

mod helpers;

use driveview_core::error::ErrorKind;
use driveview_service::{
    extract_dropped_entries, skip_empty_files, RemoteDrive, TreeService, UploadOptions,
    UploadService,
};
use driveview_storage::MemoryDrive;

#[tokio::test]
async fn test_local_directory_upload_recreates_structure() {
    let work = tempfile::tempdir().unwrap();
    let project = work.path().join("project");
    helpers::write_tree(
        &project,
        &[
            ("README.md", "# readme"),
            ("src/main.rs", "fn main() {}"),
            ("src/util/mod.rs", "pub mod io;"),
            ("src/util/io.rs", "// io"),
            ("docs/guide.txt", "guide"),
            ("docs/empty.txt", ""),
        ],
    );

    // A small batch size forces several reads per directory.
    let selection = helpers::open_selection(&[&project], 2).await;
    let report = extract_dropped_entries(selection).await;
    assert!(!report.is_partial());
    assert_eq!(report.entries.len(), 6);

    let (entries, skipped) = skip_empty_files(report.entries);
    assert_eq!(skipped, vec!["project/docs/empty.txt".to_string()]);

    let drive = helpers::drive_with_folders(&[("root-1", "uploads", None)]);
    let tree = TreeService::new(drive.clone());
    let target = tree.resolve_path("uploads").await.unwrap();

    let summary = UploadService::new(drive.clone())
        .upload_tree(entries, target, UploadOptions::default())
        .await
        .unwrap();
    assert_eq!(summary.files_uploaded, 5);
    assert_eq!(summary.folders_created, 4);

    let lines = tree
        .get_tree("uploads", None)
        .await
        .unwrap()
        .render_lines();
    assert_eq!(
        lines,
        vec![
            "├── project/",
            "  ├── docs/",
            "  ├── src/",
            "    ├── util/",
        ]
    );

    let util = tree.resolve_path("uploads/project/src/util").await.unwrap();
    let contents = drive.list_folder_contents(util.as_ref()).await.unwrap();
    let mut names: Vec<&str> = contents.iter().map(|i| i.name()).collect();
    names.sort();
    assert_eq!(names, vec!["io.rs", "mod.rs"]);
}

#[tokio::test]
async fn test_conflicting_folder_stops_upload() {
    let work = tempfile::tempdir().unwrap();
    let local = work.path().join("batch");
    helpers::write_tree(&local, &[("a.txt", "a"), ("sub/b.txt", "b")]);

    // A folder named "batch" already exists at the root.
    let drive = helpers::drive_with_folders(&[("existing", "batch", None)]);
    let selection = helpers::open_selection(&[&local], 10).await;
    let report = extract_dropped_entries(selection).await;

    let err = UploadService::new(drive.clone())
        .upload_tree(report.entries, None, UploadOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::RemoteOperation);

    let folders = drive.list_folders().await.unwrap();
    assert_eq!(folders.len(), 1);
}

#[tokio::test]
async fn test_snapshot_survives_restart() {
    let work = tempfile::tempdir().unwrap();
    let local = work.path().join("notes");
    helpers::write_tree(&local, &[("2024/jan.md", "jan"), ("2024/feb.md", "feb")]);
    let snapshot_path = work.path().join("state/drive.json");

    {
        let drive = std::sync::Arc::new(MemoryDrive::load_snapshot(&snapshot_path).await.unwrap());
        let selection = helpers::open_selection(&[&local], 100).await;
        let report = extract_dropped_entries(selection).await;
        UploadService::new(drive.clone())
            .upload_tree(report.entries, None, UploadOptions::default())
            .await
            .unwrap();
        drive.save_snapshot(&snapshot_path).await.unwrap();
    }

    let drive = std::sync::Arc::new(MemoryDrive::load_snapshot(&snapshot_path).await.unwrap());
    let (id, crumbs) = TreeService::new(drive.clone())
        .locate("notes/2024")
        .await
        .unwrap();
    assert!(id.is_some());
    assert_eq!(crumbs.display_string(), "Drive / notes / 2024");
    assert_eq!(drive.snapshot().await.files.len(), 2);
}
