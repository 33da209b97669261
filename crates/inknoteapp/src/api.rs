//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for hosts. A drawing UI and the CLI both talk to
//! [`InknoteApi`].
//!
//! The facade:
//! - **Dispatches** to the command function
//! - **Normalizes inputs** (point tokens, color strings, strategy names)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own and holds no business rules.
//!
//! ## Point Tokens
//!
//! Hosts without a pointer device (the CLI, scripts) describe a stroke as
//! tokens of the form `x,y` or `x,y,pressure`:
//!
//! ```text
//! 10,10  12.5,11,0.5  15,13.75
//! ```
//!
//! ## Generic Over StorageBackend
//!
//! `InknoteApi<B: StorageBackend>`:
//! - Production: `InknoteApi<FsBackend>`
//! - Testing: `InknoteApi<MemBackend>`

use crate::commands;
use crate::error::{InknoteError, Result};
use crate::model::{Color, Notebook, Point};
use crate::obfuscate::Strategy;
use crate::store::{NotebookStore, StorageBackend};
use std::path::Path;

pub use crate::commands::{
    CmdMessage, CmdResult, DoctorReport, MessageLevel, NotebookInfo, PageSummary,
};

pub struct InknoteApi<B: StorageBackend> {
    store: NotebookStore<B>,
}

impl<B: StorageBackend> InknoteApi<B> {
    pub fn new(store: NotebookStore<B>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &NotebookStore<B> {
        &self.store
    }

    /// The notebook to show on startup. Never fails.
    pub fn load(&self) -> Notebook {
        self.store.load_or_default()
    }

    /// Saves the whole notebook (the host's autosave path).
    pub fn save(&self, notebook: &Notebook) -> Result<()> {
        self.store.save(notebook)
    }

    pub fn init(&self, name: Option<String>, force: bool) -> Result<CmdResult> {
        commands::init::run(&self.store, name, force)
    }

    pub fn info(&self) -> Result<CmdResult> {
        commands::info::run(&self.store)
    }

    pub fn list_pages(&self) -> Result<CmdResult> {
        commands::pages::list(&self.store)
    }

    pub fn add_page(&self, title: Option<String>) -> Result<CmdResult> {
        commands::pages::add(&self.store, title)
    }

    pub fn rename_page(&self, index: usize, title: &str) -> Result<CmdResult> {
        if title.trim().is_empty() {
            return Err(InknoteError::Api("Title cannot be empty".into()));
        }
        commands::pages::rename(&self.store, index, title)
    }

    pub fn remove_page(&self, index: usize) -> Result<CmdResult> {
        commands::pages::remove(&self.store, index)
    }

    pub fn clear_page(&self, index: usize) -> Result<CmdResult> {
        commands::pages::clear(&self.store, index)
    }

    pub fn draw<S: AsRef<str>>(
        &self,
        page_index: usize,
        preset_name: &str,
        points: &[S],
        color: Option<&str>,
    ) -> Result<CmdResult> {
        let points = parse_points(points)?;
        let color = color.map(str::parse::<Color>).transpose()?;
        commands::strokes::draw(&self.store, page_index, preset_name, points, color)
    }

    pub fn erase(&self, page_index: usize, stroke_index: usize) -> Result<CmdResult> {
        commands::strokes::erase(&self.store, page_index, stroke_index)
    }

    pub fn export(&self, output: Option<&Path>) -> Result<CmdResult> {
        commands::export::run(&self.store, output)
    }

    pub fn import(&self, input: &Path) -> Result<CmdResult> {
        commands::import::run(&self.store, input)
    }

    pub fn doctor(&self) -> Result<CmdResult> {
        commands::doctor::run(&self.store)
    }

    pub fn rekey(&mut self, new_key: Option<&str>, new_strategy: Option<&str>) -> Result<CmdResult> {
        if new_key.is_none() && new_strategy.is_none() {
            return Err(InknoteError::Api(
                "Nothing to change: pass a new key and/or a new strategy".into(),
            ));
        }
        let strategy = new_strategy.map(str::parse::<Strategy>).transpose()?;
        commands::rekey::run(&mut self.store, new_key, strategy)
    }

    pub fn brushes(&self) -> CmdResult {
        commands::brushes::run()
    }
}

/// Parses one `x,y` or `x,y,pressure` token.
pub fn parse_point(token: &str) -> Result<Point> {
    let invalid = || InknoteError::InvalidValue(format!("Invalid point '{}' (expected x,y or x,y,pressure)", token));
    let parts: Vec<&str> = token.split(',').map(str::trim).collect();

    let coord = |s: &str| -> Result<f64> {
        let v: f64 = s.parse().map_err(|_| invalid())?;
        if v.is_finite() {
            Ok(v)
        } else {
            Err(invalid())
        }
    };

    match parts.as_slice() {
        [x, y] => Ok(Point::new(coord(x)?, coord(y)?)),
        [x, y, p] => {
            let pressure: f32 = p.parse().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&pressure) {
                return Err(InknoteError::InvalidValue(format!(
                    "Pressure {} is outside 0..=1",
                    pressure
                )));
            }
            Ok(Point::with_pressure(coord(x)?, coord(y)?, pressure))
        }
        _ => Err(invalid()),
    }
}

pub fn parse_points<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Point>> {
    tokens.iter().map(|t| parse_point(t.as_ref())).collect()
}
