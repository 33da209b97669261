//! # Storage Layer
//!
//! [`NotebookStore`] ties one storage location to one key and one obfuscation
//! strategy, and runs the [`pipeline`](crate::pipeline) against it.
//!
//! ## Split of Responsibilities
//!
//! - [`backend::StorageBackend`]: raw bytes in, raw bytes out. Knows nothing
//!   about notebooks.
//!   - [`fs_backend::FsBackend`]: one file, atomic replace on write.
//!   - [`mem_backend::MemBackend`]: in-memory, for tests.
//! - [`NotebookStore`]: encode on save, decode on load, and the policy for
//!   what a failed load means.
//!
//! ## Explicit Configuration
//!
//! Path, key and strategy are values owned by whoever owns the store; there
//! is no process-wide default notebook. The free functions [`save`] and
//! [`load`] build a throwaway store for a single call.
//!
//! ## Save Semantics
//!
//! Every save writes the whole notebook; there is no incremental patching and
//! no previous version is kept. Save errors always propagate.
//!
//! ## Load Semantics
//!
//! - [`NotebookStore::try_load`] returns a tagged [`LoadOutcome`].
//! - [`NotebookStore::load`] collapses it: a missing file and an unreadable
//!   file both come back as `None`, and callers start a fresh notebook.
//!   Note that this hides a broken file from the user; callers that would
//!   then save over it should use `try_load` instead.

use crate::error::Result;
use crate::model::Notebook;
use crate::obfuscate::{EncodingObfuscator, Obfuscator};
use crate::pipeline::{self, LoadOutcome};
use fs_backend::FsBackend;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;

pub struct NotebookStore<B: StorageBackend> {
    backend: B,
    key: String,
    obfuscator: Box<dyn Obfuscator>,
}

impl<B: StorageBackend> NotebookStore<B> {
    /// A store using the default (key-independent) encoding strategy.
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self::with_obfuscator(backend, key, Box::new(EncodingObfuscator))
    }

    pub fn with_obfuscator(
        backend: B,
        key: impl Into<String>,
        obfuscator: Box<dyn Obfuscator>,
    ) -> Self {
        Self {
            backend,
            key: key.into(),
            obfuscator,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn strategy_name(&self) -> &'static str {
        self.obfuscator.name()
    }

    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = key.into();
    }

    pub fn set_obfuscator(&mut self, obfuscator: Box<dyn Obfuscator>) {
        self.obfuscator = obfuscator;
    }

    pub fn exists(&self) -> bool {
        self.backend.exists()
    }

    /// Writes the entire notebook, replacing whatever was stored.
    pub fn save(&self, notebook: &Notebook) -> Result<()> {
        let bytes = pipeline::encode(notebook, &self.key, self.obfuscator.as_ref())?;
        self.backend.write_bytes(&bytes)?;
        info!(
            "event=notebook_save status=ok location={} strategy={} pages={} strokes={}",
            self.backend.location().display(),
            self.obfuscator.name(),
            notebook.pages.len(),
            notebook.stroke_count()
        );
        Ok(())
    }

    pub fn try_load(&self) -> LoadOutcome {
        let location = self.backend.location();
        let bytes = match self.backend.read_bytes() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!(
                    "event=notebook_load status=missing location={}",
                    location.display()
                );
                return LoadOutcome::Missing;
            }
            Err(e) => {
                warn!(
                    "event=notebook_load status=error kind={} location={} error={}",
                    e.kind(),
                    location.display(),
                    e
                );
                return LoadOutcome::Unreadable(e);
            }
        };

        match pipeline::decode(&bytes, &self.key, self.obfuscator.as_ref()) {
            Ok(notebook) => {
                debug!(
                    "event=notebook_load status=ok location={} pages={}",
                    location.display(),
                    notebook.pages.len()
                );
                LoadOutcome::Loaded(notebook)
            }
            Err(e) => {
                warn!(
                    "event=notebook_load status=error kind={} location={} error={}",
                    e.kind(),
                    location.display(),
                    e
                );
                LoadOutcome::Unreadable(e)
            }
        }
    }

    /// `Some` only for a usable notebook. Missing and unreadable are both
    /// `None`; treat it as "start fresh", never as "retry".
    pub fn load(&self) -> Option<Notebook> {
        self.try_load().into_notebook()
    }

    /// The notebook to show on startup: the stored one, or a fresh notebook
    /// with a single empty page.
    pub fn load_or_default(&self) -> Notebook {
        self.load().unwrap_or_default()
    }
}

impl NotebookStore<FsBackend> {
    pub fn open(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self::new(FsBackend::new(path), key)
    }
}

/// Saves `notebook` to `path` with the default strategy.
pub fn save(notebook: &Notebook, path: &Path, key: &str) -> Result<()> {
    NotebookStore::open(path, key).save(notebook)
}

/// Loads the notebook at `path` with the default strategy. `None` when the
/// file does not exist or cannot be read back.
pub fn load(path: &Path, key: &str) -> Option<Notebook> {
    NotebookStore::open(path, key).load()
}
