//! Test doubles shared by the service unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use driveview_core::error::AppError;
use driveview_core::result::AppResult;
use driveview_core::traits::{DirectoryEntry, DirectoryReader, FileContent, MemoryFile};
use driveview_core::types::{FileId, FolderId};
use driveview_entity::{FileNode, FileSystemItem, FolderNode};

use crate::remote::RemoteDrive;

/// A mutation observed by [`RecordingDrive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateFolder { name: String, parent: Option<String> },
    AddFile { name: String, parent: Option<String> },
}

/// Remote drive that records every mutation and hands out sequential
/// folder IDs (`folder-1`, `folder-2`, …).
#[derive(Debug, Default)]
pub struct RecordingDrive {
    folders: Mutex<Vec<FolderNode>>,
    files: Mutex<Vec<FileNode>>,
    calls: Mutex<Vec<Call>>,
    sizes: Mutex<Vec<u64>>,
    list_calls: AtomicUsize,
    next_id: AtomicUsize,
    fail_folder: Option<String>,
    fail_file: Option<String>,
}

impl RecordingDrive {
    pub fn with_folders(folders: &[(&str, &str, Option<&str>)]) -> Self {
        let drive = Self::default();
        {
            let mut list = drive.folders.lock().unwrap();
            for (id, name, parent) in folders {
                list.push(FolderNode::new(*id, *name, parent.map(FolderId::from)));
            }
        }
        drive
    }

    pub fn with_file(self, id: &str, name: &str, size: u64, parent: Option<&str>) -> Self {
        self.files
            .lock()
            .unwrap()
            .push(FileNode::new(id, name, size, parent.map(FolderId::from)));
        self
    }

    pub fn fail_create_folder(mut self, name: &str) -> Self {
        self.fail_folder = Some(name.to_string());
        self
    }

    pub fn fail_add_file(mut self, name: &str) -> Self {
        self.fail_file = Some(name.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sizes(&self) -> Vec<u64> {
        self.sizes.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteDrive for RecordingDrive {
    async fn list_folders(&self) -> AppResult<Vec<FolderNode>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.folders.lock().unwrap().clone())
    }

    async fn list_folder_contents(
        &self,
        folder_id: Option<&FolderId>,
    ) -> AppResult<Vec<FileSystemItem>> {
        let mut items: Vec<FileSystemItem> = self
            .folders
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.parent_id.as_ref() == folder_id)
            .cloned()
            .map(Into::into)
            .collect();
        items.extend(
            self.files
                .lock()
                .unwrap()
                .iter()
                .filter(|f| f.parent_id.as_ref() == folder_id)
                .cloned()
                .map(FileSystemItem::from),
        );
        Ok(items)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<FileSystemItem>> {
        let query = query.to_lowercase();
        let mut items: Vec<FileSystemItem> = self
            .folders
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.name.to_lowercase().contains(&query))
            .cloned()
            .map(Into::into)
            .collect();
        items.extend(
            self.files
                .lock()
                .unwrap()
                .iter()
                .filter(|f| f.name.to_lowercase().contains(&query))
                .cloned()
                .map(FileSystemItem::from),
        );
        Ok(items)
    }

    async fn create_folder(&self, name: &str, parent_id: Option<&FolderId>) -> AppResult<FolderId> {
        self.calls.lock().unwrap().push(Call::CreateFolder {
            name: name.to_string(),
            parent: parent_id.map(|p| p.to_string()),
        });
        if self.fail_folder.as_deref() == Some(name) {
            return Err(AppError::remote("create rejected"));
        }
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let id = FolderId::new(format!("folder-{n}"));
        self.folders
            .lock()
            .unwrap()
            .push(FolderNode::new(id.clone(), name, parent_id.cloned()));
        Ok(id)
    }

    async fn add_file(
        &self,
        name: &str,
        size: u64,
        _content: &dyn FileContent,
        parent_id: Option<&FolderId>,
    ) -> AppResult<()> {
        self.calls.lock().unwrap().push(Call::AddFile {
            name: name.to_string(),
            parent: parent_id.map(|p| p.to_string()),
        });
        if self.fail_file.as_deref() == Some(name) {
            return Err(AppError::remote("upload rejected"));
        }
        self.sizes.lock().unwrap().push(size);
        let id = FileId::new(format!("file-{}", self.sizes.lock().unwrap().len()));
        self.files
            .lock()
            .unwrap()
            .push(FileNode::new(id, name, size, parent_id.cloned()));
        Ok(())
    }
}

/// Directory reader serving scripted batches, then empty batches forever.
pub struct ScriptedReader {
    batches: VecDeque<AppResult<Vec<DirectoryEntry>>>,
    reads: Arc<AtomicUsize>,
}

#[async_trait]
impl DirectoryReader for ScriptedReader {
    async fn read_entries(&mut self) -> AppResult<Vec<DirectoryEntry>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.batches.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn file(name: &str, content: &str) -> DirectoryEntry {
    DirectoryEntry::file(name, Arc::new(MemoryFile::new(content.to_string())))
}

/// Directory whose children arrive in a single batch.
pub fn dir(name: &str, children: Vec<DirectoryEntry>) -> DirectoryEntry {
    dir_batches(name, vec![children]).0
}

/// Directory whose children arrive in the given batches; also returns a
/// counter of `read_entries` calls.
pub fn dir_batches(
    name: &str,
    batches: Vec<Vec<DirectoryEntry>>,
) -> (DirectoryEntry, Arc<AtomicUsize>) {
    let reads = Arc::new(AtomicUsize::new(0));
    let reader = ScriptedReader {
        batches: batches.into_iter().filter(|b| !b.is_empty()).map(Ok).collect(),
        reads: reads.clone(),
    };
    (DirectoryEntry::directory(name, Box::new(reader)), reads)
}

/// Directory that returns `children` in a first batch, then fails.
pub fn failing_dir(name: &str, children: Vec<DirectoryEntry>) -> DirectoryEntry {
    let reader = ScriptedReader {
        batches: VecDeque::from(vec![
            Ok(children),
            Err(AppError::storage("permission denied")),
        ]),
        reads: Arc::new(AtomicUsize::new(0)),
    };
    DirectoryEntry::directory(name, Box::new(reader))
}
