use crate::error::{InknoteError, Result};
use crate::model::{Notebook, Page};
use crate::pipeline::LoadOutcome;
use crate::store::{NotebookStore, StorageBackend};

/// Loads the notebook that an edit will be applied to.
///
/// Missing file: a fresh default notebook (first run).
/// Unreadable file: the load error, so the caller never overwrites it.
pub fn load_for_edit<B: StorageBackend>(store: &NotebookStore<B>) -> Result<Notebook> {
    match store.try_load() {
        LoadOutcome::Loaded(nb) => Ok(nb),
        LoadOutcome::Missing => Ok(Notebook::default()),
        LoadOutcome::Unreadable(e) => Err(e),
    }
}

/// Loads a notebook that must already exist (read-only commands).
pub fn load_existing<B: StorageBackend>(store: &NotebookStore<B>) -> Result<Notebook> {
    match store.try_load() {
        LoadOutcome::Loaded(nb) => Ok(nb),
        LoadOutcome::Missing => Err(InknoteError::Store(format!(
            "No notebook at {}",
            store.location().display()
        ))),
        LoadOutcome::Unreadable(e) => Err(e),
    }
}

/// Converts a 1-based page index to a 0-based one, checking bounds.
pub fn page_slot(notebook: &Notebook, index: usize) -> Result<usize> {
    if index == 0 || index > notebook.pages.len() {
        return Err(InknoteError::PageNotFound(index));
    }
    Ok(index - 1)
}

pub fn page_mut(notebook: &mut Notebook, index: usize) -> Result<&mut Page> {
    let slot = page_slot(notebook, index)?;
    Ok(&mut notebook.pages[slot])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compress;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn test_load_for_edit_missing_gives_default() {
        let store = NotebookStore::new(MemBackend::new(), "k");
        let nb = load_for_edit(&store).unwrap();
        assert_eq!(nb, Notebook::default());
    }

    #[test]
    fn test_load_for_edit_unreadable_is_error() {
        let bytes = compress::compress(b"@@@").unwrap();
        let store = NotebookStore::new(MemBackend::with_bytes(bytes), "k");
        assert!(matches!(
            load_for_edit(&store),
            Err(InknoteError::Decode(_))
        ));
    }

    #[test]
    fn test_load_existing_missing_is_error() {
        let store = NotebookStore::new(MemBackend::new(), "k");
        let err = load_existing(&store).unwrap_err();
        assert!(err.to_string().contains("No notebook"));
    }

    #[test]
    fn test_page_slot_bounds() {
        let nb = Notebook::default();
        assert_eq!(page_slot(&nb, 1).unwrap(), 0);
        assert!(matches!(page_slot(&nb, 0), Err(InknoteError::PageNotFound(0))));
        assert!(matches!(page_slot(&nb, 2), Err(InknoteError::PageNotFound(2))));
    }
}
