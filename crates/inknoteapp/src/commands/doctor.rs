use crate::commands::{CmdMessage, CmdResult, DoctorReport};
use crate::error::Result;
use crate::pipeline::LoadOutcome;
use crate::store::{NotebookStore, StorageBackend};

/// Classifies the notebook file without changing it.
pub fn run<B: StorageBackend>(store: &NotebookStore<B>) -> Result<CmdResult> {
    let location = store.location();
    let mut result = CmdResult::default();

    let report = match store.try_load() {
        LoadOutcome::Missing => {
            result.add_message(CmdMessage::info(format!(
                "No notebook at {} (a fresh one is created on first save)",
                location.display()
            )));
            DoctorReport::Missing
        }
        LoadOutcome::Loaded(notebook) => {
            result.add_message(CmdMessage::success(format!(
                "Notebook '{}' at {} is readable ({} strategy)",
                notebook.name,
                location.display(),
                store.strategy_name()
            )));
            let report = DoctorReport::Healthy {
                pages: notebook.pages.len(),
                strokes: notebook.stroke_count(),
            };
            result = result.with_notebook(notebook);
            report
        }
        LoadOutcome::Unreadable(e) => {
            result.add_message(CmdMessage::error(format!(
                "Notebook at {} is unreadable: {}",
                location.display(),
                e
            )));
            DoctorReport::Unreadable {
                kind: e.kind().to_string(),
                detail: e.to_string(),
            }
        }
    };
    Ok(result.with_report(report))
}
