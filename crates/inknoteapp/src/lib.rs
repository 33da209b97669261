//! # Inknote Architecture
//!
//! Inknote is the **persistence core of a handwriting notebook**: pages of
//! ink strokes, saved as one opaque file and read back losslessly. The
//! drawing surface belongs to the host; this crate owns the data model, the
//! byte format and the storage policy.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (CLI crate, or a drawing UI)                          │
//! │  - Captures input, renders pages, handles terminal I/O      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Commands (commands/*.rs)              │
//! │  - Load, edit, save the whole notebook                      │
//! │  - Page/stroke rules, structured CmdResult                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NotebookStore: one location + key + strategy             │
//! │  - FsBackend (atomic file replace), MemBackend (tests)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pipeline (pipeline.rs)                                     │
//! │  codec (JSON) → obfuscate (key) → compress (gzip)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or exits the process.
//! Diagnostics go through the `log` facade; the host decides whether and
//! where they are printed.
//!
//! ## The Obfuscation Layer Is Not Encryption
//!
//! The default `encoding` strategy is a reversible text encoding that
//! ignores the key. It keeps casual readers out and nothing more. The
//! `aes-gcm` strategy authenticates the key, but the key itself is plain
//! configuration; this crate does not manage secrets.
//!
//! ## Module Overview
//!
//! - [`model`]: Point, Color, Stroke, Page, Notebook
//! - [`brush`]: Brush presets (never persisted)
//! - [`codec`]: Versioned JSON document
//! - [`obfuscate`]: Key-parameterized text/bytes transform
//! - [`compress`]: gzip
//! - [`pipeline`]: encode/decode and [`pipeline::LoadOutcome`]
//! - [`store`]: Backends and [`store::NotebookStore`]
//! - [`commands`]: Notebook operations
//! - [`api`]: Facade for hosts
//! - [`config`]: Layered configuration
//! - [`init`]: Context construction from config + overrides
//! - [`error`]: Error types

pub mod api;
pub mod brush;
pub mod codec;
pub mod commands;
pub mod compress;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod obfuscate;
pub mod pipeline;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
