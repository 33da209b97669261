use crate::brush::BrushPreset;
use crate::model::{Color, Notebook, Point, Stroke};
use crate::store::fs_backend::FsBackend;
use crate::store::NotebookStore;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub store: NotebookStore<FsBackend>,
    pub path: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("notebook.inknote");
        let store = NotebookStore::open(path.clone(), "test-key");
        Self {
            _temp_dir: temp_dir,
            store,
            path,
        }
    }
}

/// Three pages with mixed ink, a Unicode title and a translucent highlighter.
pub fn sample_notebook() -> Notebook {
    let presets = BrushPreset::defaults();
    let mut nb = Notebook::new("Sample");

    let first = nb.add_page("Sketches");
    first.add_stroke(presets[0].stroke(vec![
        Point::with_pressure(10.0, 10.0, 0.25),
        Point::with_pressure(12.5, 11.0, 0.5),
        Point::with_pressure(15.0, 13.75, 1.0),
    ]));
    first.add_stroke(presets[2].stroke(vec![Point::new(0.0, 40.0), Point::new(120.0, 40.0)]));

    nb.add_page("页面 2 · 草稿");

    nb.add_page("Calligraphy").add_stroke(Stroke::new(
        vec![Point::new(-1.5, 3.25)],
        6.0,
        1.5,
        Color::rgba(12, 34, 56, 200),
        false,
    ));
    nb
}
