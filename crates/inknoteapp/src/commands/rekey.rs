use crate::commands::helpers::load_existing;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::obfuscate::Strategy;
use crate::pipeline;
use crate::store::{NotebookStore, StorageBackend};
use log::info;

/// Re-saves the notebook under a new key and/or strategy.
///
/// The notebook is read with the store's current settings. The store only
/// switches to the new settings once the new image is written, so a failed
/// write leaves both the file and the store as they were.
pub fn run<B: StorageBackend>(
    store: &mut NotebookStore<B>,
    new_key: Option<&str>,
    new_strategy: Option<Strategy>,
) -> Result<CmdResult> {
    let notebook = load_existing(store)?;

    let key = new_key.unwrap_or(store.key()).to_string();
    let strategy = match new_strategy {
        Some(strategy) => strategy,
        None => store.strategy_name().parse()?,
    };
    let obfuscator = strategy.build();

    let bytes = pipeline::encode(&notebook, &key, obfuscator.as_ref())?;
    store.backend().write_bytes(&bytes)?;
    let from = store.strategy_name();
    store.set_key(key);
    store.set_obfuscator(obfuscator);

    info!(
        "event=notebook_rekey status=ok location={} from={} to={}",
        store.location().display(),
        from,
        strategy
    );

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Re-saved '{}' with strategy {}{}",
        notebook.name,
        strategy,
        if new_key.is_some() { " and a new key" } else { "" }
    )));
    if strategy == Strategy::Encoding && new_key.is_some() {
        result.add_message(CmdMessage::warning(
            "The encoding strategy ignores the key; use aes-gcm for a key that matters",
        ));
    }
    Ok(result.with_notebook(notebook))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InknoteError;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::sample_notebook;

    #[test]
    fn test_rekey_to_aes_then_old_key_fails() {
        let mut store = NotebookStore::new(MemBackend::new(), "old");
        store.save(&sample_notebook()).unwrap();

        run(&mut store, Some("new"), Some(Strategy::AesGcm)).unwrap();
        assert_eq!(store.strategy_name(), "aes-gcm");
        assert_eq!(store.load(), Some(sample_notebook()));

        store.set_key("old");
        assert!(matches!(
            store.try_load().error(),
            Some(InknoteError::WrongKey(_))
        ));
    }

    #[test]
    fn test_rekey_back_to_encoding() {
        let mut store = NotebookStore::with_obfuscator(
            MemBackend::new(),
            "k",
            Strategy::AesGcm.build(),
        );
        store.save(&sample_notebook()).unwrap();

        run(&mut store, None, Some(Strategy::Encoding)).unwrap();
        assert_eq!(store.strategy_name(), "encoding");
        assert_eq!(store.key(), "k");

        let plain = NotebookStore::new(MemBackend::with_bytes(store.backend().stored().unwrap()), "any");
        assert_eq!(plain.load(), Some(sample_notebook()));
    }

    #[test]
    fn test_rekey_key_only_keeps_strategy() {
        let mut store =
            NotebookStore::with_obfuscator(MemBackend::new(), "a", Strategy::AesGcm.build());
        store.save(&sample_notebook()).unwrap();

        run(&mut store, Some("b"), None).unwrap();
        assert_eq!(store.strategy_name(), "aes-gcm");
        assert_eq!(store.key(), "b");
        assert_eq!(store.load(), Some(sample_notebook()));
    }

    #[test]
    fn test_rekey_failed_write_keeps_settings() {
        let mut store = NotebookStore::new(MemBackend::new(), "k");
        store.save(&sample_notebook()).unwrap();
        store.backend().set_simulate_write_error(true);

        assert!(run(&mut store, Some("x"), Some(Strategy::AesGcm)).is_err());
        assert_eq!(store.key(), "k");
        assert_eq!(store.strategy_name(), "encoding");
        assert_eq!(store.load(), Some(sample_notebook()));
    }

    #[test]
    fn test_rekey_unreadable_is_error() {
        let mut store = NotebookStore::new(MemBackend::with_bytes(b"junk".to_vec()), "k");
        assert!(run(&mut store, Some("x"), None).is_err());
        assert_eq!(store.backend().write_count(), 0);
    }
}
