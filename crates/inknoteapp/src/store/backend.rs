use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw notebook byte I/O.
/// This trait handles the "where" of storage (filesystem vs memory),
/// while `NotebookStore` handles the "what" (the encode/decode pipeline).
pub trait StorageBackend {
    /// Read the whole stored image.
    /// Returns Ok(None) if nothing is stored yet (first run).
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_bytes(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the stored image with `bytes`.
    /// MUST be atomic (e.g. write to tmp then rename): a reader sees either
    /// the old image or the new one, never a truncated mix.
    fn write_bytes(&self, bytes: &[u8]) -> Result<()>;

    /// Where the image lives. For FsBackend, the real path; for MemBackend,
    /// a virtual one.
    fn location(&self) -> PathBuf;

    /// Whether anything is stored at the location.
    fn exists(&self) -> bool;
}
