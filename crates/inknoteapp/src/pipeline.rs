//! # Persistence Pipeline
//!
//! The byte image of a notebook file is built in three stages and read back
//! by running the exact inverse:
//!
//! ```text
//! save:  Notebook ─serialize─▶ text ─obfuscate(key)─▶ bytes ─compress─▶ file bytes
//! load:  file bytes ─decompress─▶ bytes ─deobfuscate(key)─▶ text ─deserialize─▶ Notebook
//! ```
//!
//! [`encode`] and [`decode`] are pure: no I/O, just the transform. The first
//! failing stage wins, so a caller can tell a corrupt gzip stream from a bad
//! key from a malformed document by the error kind alone.
//!
//! [`LoadOutcome`] is the tagged result of reading a location: it keeps the
//! failure kind for logging, tests and the doctor report. The UI-facing
//! boundary collapses it with [`LoadOutcome::into_notebook`].

use crate::codec;
use crate::compress;
use crate::error::{InknoteError, Result};
use crate::model::Notebook;
use crate::obfuscate::Obfuscator;

pub fn encode(notebook: &Notebook, key: &str, obfuscator: &dyn Obfuscator) -> Result<Vec<u8>> {
    let text = codec::serialize(notebook)?;
    let hidden = obfuscator.obfuscate(&text, key)?;
    compress::compress(&hidden)
}

pub fn decode(bytes: &[u8], key: &str, obfuscator: &dyn Obfuscator) -> Result<Notebook> {
    let hidden = compress::decompress(bytes)?;
    let text = obfuscator.deobfuscate(&hidden, key)?;
    codec::deserialize(&text)
}

#[derive(Debug)]
pub enum LoadOutcome {
    /// The location held a readable notebook.
    Loaded(Notebook),
    /// Nothing stored yet. This is the first-run case, not a failure.
    Missing,
    /// Something is stored but could not be turned back into a notebook.
    Unreadable(InknoteError),
}

impl LoadOutcome {
    /// Collapses to "usable notebook or not". Missing and unreadable look the
    /// same from here.
    pub fn into_notebook(self) -> Option<Notebook> {
        match self {
            LoadOutcome::Loaded(nb) => Some(nb),
            LoadOutcome::Missing | LoadOutcome::Unreadable(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, LoadOutcome::Missing)
    }

    pub fn error(&self) -> Option<&InknoteError> {
        match self {
            LoadOutcome::Unreadable(e) => Some(e),
            _ => None,
        }
    }
}
