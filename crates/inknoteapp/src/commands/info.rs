use crate::commands::helpers::load_existing;
use crate::commands::{CmdResult, NotebookInfo};
use crate::error::Result;
use crate::store::{NotebookStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &NotebookStore<B>) -> Result<CmdResult> {
    let notebook = load_existing(store)?;
    let info = NotebookInfo {
        name: notebook.name.clone(),
        location: store.location(),
        strategy: store.strategy_name().to_string(),
        pages: notebook.pages.len(),
        strokes: notebook.stroke_count(),
        highlighters: notebook.highlighter_count(),
    };
    Ok(CmdResult::default().with_info(info).with_notebook(notebook))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::sample_notebook;

    #[test]
    fn test_info_counts() {
        let store = NotebookStore::new(MemBackend::new(), "k");
        store.save(&sample_notebook()).unwrap();

        let info = run(&store).unwrap().info.unwrap();
        assert_eq!(info.name, "Sample");
        assert_eq!(info.pages, 3);
        assert_eq!(info.strokes, 3);
        assert_eq!(info.highlighters, 1);
        assert_eq!(info.strategy, "encoding");
    }

    #[test]
    fn test_info_missing_notebook() {
        let store = NotebookStore::new(MemBackend::new(), "k");
        assert!(run(&store).is_err());
    }
}
