use crate::codec;
use crate::commands::helpers::load_existing;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NotebookStore, StorageBackend};
use std::fs;
use std::path::Path;

/// Writes the decoded document as pretty JSON. With no `output`, the text
/// is returned in [`CmdResult::document`] for the host to print.
pub fn run<B: StorageBackend>(store: &NotebookStore<B>, output: Option<&Path>) -> Result<CmdResult> {
    let notebook = load_existing(store)?;
    let text = codec::serialize(&notebook)?;

    let mut result = CmdResult::default();
    match output {
        Some(path) => {
            fs::write(path, text.as_bytes())?;
            result.add_message(CmdMessage::success(format!(
                "Exported '{}' ({} pages) to {}",
                notebook.name,
                notebook.pages.len(),
                path.display()
            )));
            result = result.with_paths(vec![path.to_path_buf()]);
        }
        None => result.document = Some(text),
    }
    Ok(result.with_notebook(notebook))
}
