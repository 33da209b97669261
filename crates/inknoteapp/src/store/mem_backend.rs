use super::backend::StorageBackend;
use crate::error::{InknoteError, Result};
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since notebook I/O is
/// single-threaded. This keeps `StorageBackend` on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    bytes: RefCell<Option<Vec<u8>>>,
    simulate_write_error: RefCell<bool>,
    writes: RefCell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with a stored image, e.g. a corrupt one.
    pub fn with_bytes(bytes: Vec<u8>) -> Self {
        let backend = Self::default();
        *backend.bytes.borrow_mut() = Some(bytes);
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// The currently stored image, if any.
    pub fn stored(&self) -> Option<Vec<u8>> {
        self.bytes.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn read_bytes(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.bytes.borrow().clone())
    }

    fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(InknoteError::Store("Simulated write error".to_string()));
        }
        *self.bytes.borrow_mut() = Some(bytes.to_vec());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://notebook")
    }

    fn exists(&self) -> bool {
        self.bytes.borrow().is_some()
    }
}
