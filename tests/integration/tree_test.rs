//! Tree, breadcrumb, and search behaviour against the in-memory drive.

mod helpers;

use driveview_core::error::ErrorKind;
use driveview_core::types::{FolderId, SortDirection, SortField};
use driveview_service::{
    build_breadcrumb_path, BrowseService, RemoteDrive, SearchService, TreeService,
};

fn sample() -> std::sync::Arc<driveview_storage::MemoryDrive> {
    helpers::drive_with_folders(&[
        ("1", "docs", None),
        ("2", "2024", Some("1")),
        ("3", "q1", Some("2")),
        ("4", "music", None),
        ("5", "Docs", Some("4")),
    ])
}

#[tokio::test]
async fn test_every_folder_round_trips_through_its_path() {
    let drive = sample();
    let folders = drive.list_folders().await.unwrap();
    let tree = TreeService::new(drive.clone());

    for folder in &folders {
        let path = build_breadcrumb_path(Some(&folder.id), &folders).path_string();
        let resolved = tree.resolve_path(&path).await.unwrap();
        assert_eq!(resolved.as_ref(), Some(&folder.id), "path {path}");
    }
}

#[tokio::test]
async fn test_path_matching_is_case_sensitive() {
    let tree = TreeService::new(sample());
    let err = tree.resolve_path("DOCS").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(
        tree.resolve_path("music/Docs").await.unwrap(),
        Some(FolderId::from("5"))
    );
}

#[tokio::test]
async fn test_cyclic_folders_still_terminate() {
    let drive = helpers::drive_with_folders(&[("a", "a", Some("b")), ("b", "b", Some("a"))]);
    let crumbs = TreeService::new(drive)
        .get_breadcrumbs(Some(&FolderId::from("a")))
        .await
        .unwrap();
    assert_eq!(crumbs.segments()[0].id, None);
    assert_eq!(crumbs.segments()[0].name, "Drive");
}

#[tokio::test]
async fn test_scoped_search_and_listing() {
    let drive = sample();
    let scope = TreeService::new(drive.clone())
        .resolve_path("docs")
        .await
        .unwrap();

    let hits = SearchService::new(drive.clone())
        .search("q", scope.as_ref())
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name(), "q1");

    let everywhere = SearchService::new(drive.clone())
        .search("docs", None)
        .await
        .unwrap();
    assert_eq!(everywhere.len(), 2);

    let listing = BrowseService::new(drive)
        .list("", SortField::Name, SortDirection::Desc)
        .await
        .unwrap();
    let names: Vec<&str> = listing.items.iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["music", "docs"]);
}
