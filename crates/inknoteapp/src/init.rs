//! # Context Initialization
//!
//! Builds the [`InknoteApi`] a host works with from three sources:
//!
//! 1. [`Overrides`] given by the host (CLI flags).
//! 2. [`InknoteConfig`] loaded by `confique` from env vars and `inknote.toml`.
//! 3. Compiled defaults.
//!
//! A missing config file is not an error. A malformed one is: silently
//! falling back to defaults could point the host at a different notebook, or
//! the right notebook with the wrong key.

use crate::api::InknoteApi;
use crate::config::{default_config_dir, InknoteConfig};
use crate::error::Result;
use crate::obfuscate::Strategy;
use crate::store::fs_backend::FsBackend;
use crate::store::NotebookStore;
use log::debug;
use std::path::PathBuf;

/// Values the host wants to force, on top of loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub notebook_path: Option<PathBuf>,
    pub key: Option<String>,
    pub strategy: Option<String>,
    /// Directory holding `inknote.toml`. Defaults to [`default_config_dir`].
    pub config_dir: Option<PathBuf>,
}

pub struct InknoteContext {
    pub api: InknoteApi<FsBackend>,
    pub config: InknoteConfig,
    pub strategy: Strategy,
}

pub fn initialize(overrides: Overrides) -> Result<InknoteContext> {
    let config_dir = overrides.config_dir.clone().or_else(default_config_dir);
    let mut config = InknoteConfig::load_from(config_dir.as_deref())?;

    if let Some(path) = overrides.notebook_path {
        config.notebook_path = Some(path);
    }
    if let Some(key) = overrides.key {
        config.key = key;
    }
    if let Some(strategy) = overrides.strategy {
        config.strategy = strategy;
    }

    let strategy = config.strategy()?;
    let path = config.notebook_path();
    debug!(
        "event=context_init path={} strategy={} config_dir={}",
        path.display(),
        strategy,
        config_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "-".to_string())
    );

    let store = NotebookStore::with_obfuscator(FsBackend::new(path), config.key.clone(), strategy.build());
    Ok(InknoteContext {
        api: InknoteApi::new(store),
        config,
        strategy,
    })
}
