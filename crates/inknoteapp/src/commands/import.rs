use crate::codec;
use crate::commands::{save_with_message, CmdMessage, CmdResult, PageSummary};
use crate::error::Result;
use crate::store::{NotebookStore, StorageBackend};
use std::fs;
use std::path::Path;

/// Replaces the stored notebook with the JSON document at `input`.
///
/// The document goes through the same decoder as a loaded file, so version
/// and value checks apply. A document without pages gets the default page.
pub fn run<B: StorageBackend>(store: &NotebookStore<B>, input: &Path) -> Result<CmdResult> {
    let text = fs::read_to_string(input)?;
    let mut notebook = codec::deserialize(&text)?;

    let mut result = CmdResult::default();
    if notebook.pages.is_empty() {
        let title = notebook.next_page_title();
        notebook.add_page(title);
        result.add_message(CmdMessage::warning(
            "Imported document had no pages; added an empty one",
        ));
    }

    save_with_message(store, &notebook, &mut result)?;
    result.add_message(CmdMessage::success(format!(
        "Imported '{}' ({} pages, {} strokes) from {}",
        notebook.name,
        notebook.pages.len(),
        notebook.stroke_count(),
        input.display()
    )));
    Ok(result
        .with_pages(PageSummary::all(&notebook))
        .with_notebook(notebook))
}
