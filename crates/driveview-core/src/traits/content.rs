//! Opaque file handles passed from local selection to the remote drive.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// A readable file picked by the user.
///
/// The upload pipeline never inspects the bytes; it only forwards the
/// handle and its size to the remote drive. Implementations exist for
/// local files (`driveview-storage`) and in-memory buffers ([`MemoryFile`]).
#[async_trait]
pub trait FileContent: Send + Sync + std::fmt::Debug {
    /// Size of the content in bytes.
    fn size(&self) -> u64;

    /// Read the full content into memory.
    async fn read_bytes(&self) -> AppResult<Bytes>;
}

/// File content held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryFile {
    data: Bytes,
}

impl MemoryFile {
    /// Wrap a byte buffer.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }
}

#[async_trait]
impl FileContent for MemoryFile {
    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    async fn read_bytes(&self) -> AppResult<Bytes> {
        Ok(self.data.clone())
    }
}
