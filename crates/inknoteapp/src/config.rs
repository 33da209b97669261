//! # Configuration
//!
//! Inknote configuration is managed by [`confique`], which handles layered
//! loading from a TOML file and environment variables on top of compiled
//! defaults. Command-line flags are applied last by the host (see
//! [`crate::init`]).
//!
//! ## Resolution Order
//!
//! 1. **Command-line flags**: `--file`, `--key`, `--strategy`.
//! 2. **Environment variables**: `INKNOTE_FILE`, `INKNOTE_KEY`, `INKNOTE_STRATEGY`.
//! 3. **Config file**: `inknote.toml` in the OS config directory
//!    (via `directories`), or in `$INKNOTE_CONFIG_DIR` when set.
//! 4. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `notebook_path` | `<data dir>/notebook.inknote` | The notebook file |
//! | `key` | `inknote` | Key handed to the obfuscation strategy |
//! | `strategy` | `encoding` | `encoding` (key ignored) or `aes-gcm` |
//!
//! The key is plain configuration, not a secret store: with the default
//! `encoding` strategy it has no effect at all.

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{InknoteError, Result};
use crate::obfuscate::Strategy;

pub const CONFIG_FILENAME: &str = "inknote.toml";
pub const NOTEBOOK_FILENAME: &str = "notebook.inknote";
pub const DEFAULT_KEY: &str = "inknote";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InknoteConfig {
    /// Path of the notebook file. When absent, the OS data directory is used.
    #[config(env = "INKNOTE_FILE")]
    pub notebook_path: Option<PathBuf>,

    /// Key handed to the obfuscation strategy.
    #[config(env = "INKNOTE_KEY", default = "inknote")]
    pub key: String,

    /// Obfuscation strategy: "encoding" or "aes-gcm".
    #[config(env = "INKNOTE_STRATEGY", default = "encoding")]
    pub strategy: String,
}

impl Default for InknoteConfig {
    fn default() -> Self {
        Self {
            notebook_path: None,
            key: DEFAULT_KEY.to_string(),
            strategy: Strategy::Encoding.to_string(),
        }
    }
}

impl InknoteConfig {
    /// Loads env + `inknote.toml` from `config_dir` (missing file is fine).
    pub fn load_from(config_dir: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(dir) = config_dir {
            builder = builder.file(dir.join(CONFIG_FILENAME));
        }
        builder
            .load()
            .map_err(|e| InknoteError::Config(e.to_string()))
    }

    /// The configured strategy, parsed.
    pub fn strategy(&self) -> Result<Strategy> {
        self.strategy.parse()
    }

    /// The notebook path, falling back to the OS data directory.
    pub fn notebook_path(&self) -> PathBuf {
        self.notebook_path
            .clone()
            .unwrap_or_else(default_notebook_path)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "inknote", "inknote")
}

/// `$INKNOTE_CONFIG_DIR`, else the OS config directory.
pub fn default_config_dir() -> Option<PathBuf> {
    std::env::var_os("INKNOTE_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| project_dirs().map(|d| d.config_dir().to_path_buf()))
}

pub fn default_notebook_path() -> PathBuf {
    project_dirs()
        .map(|d| d.data_dir().join(NOTEBOOK_FILENAME))
        .unwrap_or_else(|| PathBuf::from(NOTEBOOK_FILENAME))
}
