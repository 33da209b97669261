use crate::commands::helpers::{load_for_edit, page_mut, page_slot};
use crate::commands::{save_with_message, CmdMessage, CmdResult, PageSummary};
use crate::error::{InknoteError, Result};
use crate::model::Notebook;
use crate::pipeline::LoadOutcome;
use crate::store::{NotebookStore, StorageBackend};

/// Lists pages the way a host shows them on startup: an unreadable file
/// yields a fresh notebook, with a warning instead of an error.
pub fn list<B: StorageBackend>(store: &NotebookStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let notebook = match store.try_load() {
        LoadOutcome::Loaded(nb) => nb,
        LoadOutcome::Missing => {
            result.add_message(CmdMessage::info(
                "No notebook yet. Showing a fresh one (nothing saved).",
            ));
            Notebook::default()
        }
        LoadOutcome::Unreadable(e) => {
            result.add_message(CmdMessage::warning(format!(
                "Notebook could not be read ({}). Showing a fresh one; run `inknote doctor` for details.",
                e.kind()
            )));
            Notebook::default()
        }
    };
    Ok(result
        .with_pages(PageSummary::all(&notebook))
        .with_notebook(notebook))
}

pub fn add<B: StorageBackend>(store: &NotebookStore<B>, title: Option<String>) -> Result<CmdResult> {
    let mut notebook = load_for_edit(store)?;
    let title = title.unwrap_or_else(|| notebook.next_page_title());
    notebook.add_page(title.clone());
    let index = notebook.pages.len();

    let mut result = CmdResult::default();
    save_with_message(store, &notebook, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Added page {}: {}",
        index, title
    )));
    Ok(result
        .with_pages(PageSummary::all(&notebook))
        .with_notebook(notebook))
}

pub fn rename<B: StorageBackend>(
    store: &NotebookStore<B>,
    index: usize,
    title: &str,
) -> Result<CmdResult> {
    let mut notebook = load_for_edit(store)?;
    let page = page_mut(&mut notebook, index)?;
    let old = std::mem::replace(&mut page.title, title.to_string());

    let mut result = CmdResult::default();
    save_with_message(store, &notebook, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Renamed page {}: {} -> {}",
        index, old, title
    )));
    Ok(result
        .with_pages(PageSummary::all(&notebook))
        .with_notebook(notebook))
}

/// Removes a page. The last remaining page can never be removed.
pub fn remove<B: StorageBackend>(store: &NotebookStore<B>, index: usize) -> Result<CmdResult> {
    let mut notebook = load_for_edit(store)?;
    let slot = page_slot(&notebook, index)?;
    if notebook.pages.len() <= 1 {
        return Err(InknoteError::Api("Cannot close the last page".to_string()));
    }
    let removed = notebook
        .remove_page(slot)
        .ok_or(InknoteError::PageNotFound(index))?;

    let mut result = CmdResult::default();
    save_with_message(store, &notebook, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Removed page {}: {} ({} strokes)",
        index,
        removed.title,
        removed.strokes.len()
    )));
    Ok(result
        .with_pages(PageSummary::all(&notebook))
        .with_notebook(notebook))
}

pub fn clear<B: StorageBackend>(store: &NotebookStore<B>, index: usize) -> Result<CmdResult> {
    let mut notebook = load_for_edit(store)?;
    let removed = page_mut(&mut notebook, index)?.clear();

    let mut result = CmdResult::default();
    if removed == 0 {
        result.add_message(CmdMessage::info(format!("Page {} is already empty", index)));
        return Ok(result
            .with_pages(PageSummary::all(&notebook))
            .with_notebook(notebook));
    }
    save_with_message(store, &notebook, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Cleared {} strokes from page {}",
        removed, index
    )));
    Ok(result
        .with_pages(PageSummary::all(&notebook))
        .with_notebook(notebook))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::compress;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::sample_notebook;

    fn sample_store() -> NotebookStore<MemBackend> {
        let store = NotebookStore::new(MemBackend::new(), "k");
        store.save(&sample_notebook()).unwrap();
        store
    }

    #[test]
    fn test_list_pages() {
        let store = sample_store();
        let result = list(&store).unwrap();
        assert_eq!(result.pages.len(), 3);
        assert_eq!(result.pages[0].index, 1);
        assert_eq!(result.pages[0].title, "Sketches");
        assert_eq!(result.pages[0].strokes, 2);
        assert_eq!(result.pages[0].highlighters, 1);
        assert_eq!(result.pages[1].title, "页面 2 · 草稿");
    }

    #[test]
    fn test_list_missing_shows_default_without_saving() {
        let store = NotebookStore::new(MemBackend::new(), "k");
        let result = list(&store).unwrap();
        assert_eq!(result.pages.len(), 1);
        assert_eq!(result.pages[0].title, "Page 1");
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_list_unreadable_warns() {
        let store = NotebookStore::new(MemBackend::with_bytes(b"junk".to_vec()), "k");
        let result = list(&store).unwrap();
        assert_eq!(result.pages.len(), 1);
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert!(result.messages[0].content.contains("decompression"));
    }

    #[test]
    fn test_add_page_default_title() {
        let store = sample_store();
        add(&store, None).unwrap();
        let nb = store.load().unwrap();
        assert_eq!(nb.pages.len(), 4);
        assert_eq!(nb.pages[3].title, "Page 4");
    }

    #[test]
    fn test_add_page_on_missing_starts_fresh() {
        let store = NotebookStore::new(MemBackend::new(), "k");
        add(&store, Some("Ideas".into())).unwrap();
        let nb = store.load().unwrap();
        let titles: Vec<_> = nb.pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Page 1", "Ideas"]);
    }

    #[test]
    fn test_add_page_refuses_unreadable_file() {
        let junk = compress::compress(b"not base64 !!").unwrap();
        let store = NotebookStore::new(MemBackend::with_bytes(junk.clone()), "k");
        assert!(add(&store, None).is_err());
        assert_eq!(store.backend().stored(), Some(junk));
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn test_rename_page() {
        let store = sample_store();
        rename(&store, 3, "Lettering").unwrap();
        assert_eq!(store.load().unwrap().pages[2].title, "Lettering");
        assert!(matches!(
            rename(&store, 9, "x"),
            Err(InknoteError::PageNotFound(9))
        ));
    }

    #[test]
    fn test_remove_page_keeps_order() {
        let store = sample_store();
        remove(&store, 2).unwrap();
        let nb = store.load().unwrap();
        let titles: Vec<_> = nb.pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Sketches", "Calligraphy"]);
    }

    #[test]
    fn test_cannot_remove_last_page() {
        let store = NotebookStore::new(MemBackend::new(), "k");
        store.save(&Notebook::default()).unwrap();
        let err = remove(&store, 1).unwrap_err();
        assert!(err.to_string().contains("last page"));
        assert_eq!(store.load().unwrap().pages.len(), 1);
    }

    #[test]
    fn test_clear_page() {
        let store = sample_store();
        let result = clear(&store, 1).unwrap();
        assert_eq!(result.pages[0].strokes, 0);
        let nb = store.load().unwrap();
        assert!(nb.pages[0].strokes.is_empty());
        assert_eq!(nb.pages[2].strokes.len(), 1);
    }

    #[test]
    fn test_clear_empty_page_skips_save() {
        let store = sample_store();
        let writes = store.backend().write_count();
        clear(&store, 2).unwrap();
        assert_eq!(store.backend().write_count(), writes);
    }
}
