use crate::commands::{save_with_message, CmdMessage, CmdResult, PageSummary};
use crate::error::{InknoteError, Result};
use crate::model::{Notebook, DEFAULT_NOTEBOOK_NAME};
use crate::store::{NotebookStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &NotebookStore<B>,
    name: Option<String>,
    force: bool,
) -> Result<CmdResult> {
    if store.exists() && !force {
        return Err(InknoteError::Api(format!(
            "A notebook already exists at {} (use --force to replace it)",
            store.location().display()
        )));
    }

    let notebook =
        Notebook::with_default_page(name.unwrap_or_else(|| DEFAULT_NOTEBOOK_NAME.to_string()));

    let mut result = CmdResult::default().with_pages(PageSummary::all(&notebook));
    save_with_message(store, &notebook, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Initialized notebook '{}' at {}",
        notebook.name,
        store.location().display()
    )));
    Ok(result.with_notebook(notebook))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn test_init_writes_default_notebook() {
        let store = NotebookStore::new(MemBackend::new(), "k");
        let result = run(&store, None, false).unwrap();

        let nb = store.load().unwrap();
        assert_eq!(nb.name, DEFAULT_NOTEBOOK_NAME);
        assert_eq!(nb.pages.len(), 1);
        assert_eq!(result.pages[0].title, "Page 1");
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Initialized")));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let store = NotebookStore::new(MemBackend::new(), "k");
        run(&store, Some("First".into()), false).unwrap();

        assert!(run(&store, Some("Second".into()), false).is_err());
        assert_eq!(store.load().unwrap().name, "First");

        run(&store, Some("Second".into()), true).unwrap();
        assert_eq!(store.load().unwrap().name, "Second");
    }

    #[test]
    fn test_init_force_replaces_unreadable_file() {
        let store = NotebookStore::new(MemBackend::with_bytes(b"junk".to_vec()), "k");
        assert!(store.load().is_none());
        run(&store, None, true).unwrap();
        assert!(store.load().is_some());
    }
}
