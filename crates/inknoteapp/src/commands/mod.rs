//! # Command Layer
//!
//! This module contains the notebook operations a host (the CLI, or a
//! drawing UI) performs. Each command lives in its own submodule and is a
//! plain function over a [`NotebookStore`].
//!
//! ## Role and Responsibilities
//!
//! - Load the notebook, apply one edit, save the whole notebook back.
//! - Enforce the rules the data model deliberately leaves out, such as
//!   "the last page cannot be closed".
//! - Return a structured [`CmdResult`] with summaries and leveled messages.
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout/stderr, no colors, no exit codes.
//! - **Argument parsing**: that's the host's job (or [`crate::api`]'s).
//!
//! ## Unreadable Files
//!
//! [`NotebookStore::load`] folds an unreadable file into `None`, which is the
//! right answer for "what do I show on startup". It is the wrong answer right
//! before a save, because the save would silently replace the user's file
//! with an empty notebook. Editing commands therefore go through
//! [`helpers::load_for_edit`], which starts fresh only when the file is
//! truly missing and otherwise returns the load error.
//!
//! ## Indexes
//!
//! Page and stroke indexes at this layer are **1-based**, matching what a
//! user sees in a page list.
//!
//! ## Command Modules
//!
//! - [`init`]: Write a fresh notebook
//! - [`info`]: Notebook summary
//! - [`pages`]: List, add, rename, remove and clear pages
//! - [`strokes`]: Draw with a brush preset, erase a stroke
//! - [`export`]: Write the decoded document as JSON
//! - [`import`]: Replace the notebook from a JSON document
//! - [`doctor`]: Classify the notebook file (missing / healthy / unreadable)
//! - [`rekey`]: Re-save under a new key or strategy
//! - [`brushes`]: List the brush presets
//! - [`helpers`]: Shared loading and index resolution

use crate::brush::BrushPreset;
use crate::model::{Notebook, Page};
use crate::store::{NotebookStore, StorageBackend};
use serde::Serialize;
use std::path::PathBuf;

pub mod brushes;
pub mod doctor;
pub mod export;
pub mod helpers;
pub mod import;
pub mod info;
pub mod init;
pub mod pages;
pub mod rekey;
pub mod strokes;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of a page listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSummary {
    /// 1-based display index.
    pub index: usize,
    pub title: String,
    pub strokes: usize,
    pub highlighters: usize,
}

impl PageSummary {
    pub fn from_page(index: usize, page: &Page) -> Self {
        Self {
            index,
            title: page.title.clone(),
            strokes: page.strokes.len(),
            highlighters: page.highlighter_count(),
        }
    }

    pub fn all(notebook: &Notebook) -> Vec<Self> {
        notebook
            .pages
            .iter()
            .enumerate()
            .map(|(i, p)| Self::from_page(i + 1, p))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotebookInfo {
    pub name: String,
    pub location: PathBuf,
    pub strategy: String,
    pub pages: usize,
    pub strokes: usize,
    pub highlighters: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DoctorReport {
    Missing,
    Healthy { pages: usize, strokes: usize },
    Unreadable { kind: String, detail: String },
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub notebook: Option<Notebook>,
    pub pages: Vec<PageSummary>,
    pub info: Option<NotebookInfo>,
    pub report: Option<DoctorReport>,
    pub brushes: Vec<BrushPreset>,
    pub paths: Vec<PathBuf>,
    /// Rendered document text, when a command produces one for the host.
    pub document: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_notebook(mut self, notebook: Notebook) -> Self {
        self.notebook = Some(notebook);
        self
    }

    pub fn with_pages(mut self, pages: Vec<PageSummary>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_info(mut self, info: NotebookInfo) -> Self {
        self.info = Some(info);
        self
    }

    pub fn with_report(mut self, report: DoctorReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }
}

/// Saves `notebook` and records a timestamped success message.
pub(crate) fn save_with_message<B: StorageBackend>(
    store: &NotebookStore<B>,
    notebook: &Notebook,
    result: &mut CmdResult,
) -> crate::error::Result<()> {
    store.save(notebook)?;
    result.add_message(CmdMessage::info(format!(
        "Notebook saved: {}",
        chrono::Local::now().format("%H:%M:%S")
    )));
    Ok(())
}
