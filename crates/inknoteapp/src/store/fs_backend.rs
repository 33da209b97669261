use super::backend::StorageBackend;
use crate::error::{InknoteError, Result};
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A single notebook file on the local filesystem.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(InknoteError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_bytes(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(InknoteError::Io(e)),
        }
    }

    fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        // Atomic write: the temp file shares the target's directory so the
        // rename never crosses a filesystem boundary.
        let tmp_path = dir.join(format!(".inknote-{}.tmp", Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, bytes) {
            let _ = fs::remove_file(&tmp_path);
            return Err(InknoteError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(InknoteError::Io(e));
        }

        debug!(
            "event=write_bytes status=ok path={} bytes={}",
            self.path.display(),
            bytes.len()
        );
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}
