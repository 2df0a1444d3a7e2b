use super::KeyValueStore;
use crate::error::{Result, StartpageError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory storage backend.
///
/// Uses `RefCell` for interior mutability since the page is single-threaded.
/// An optional capacity mimics the browser's storage quota: the sum of key and
/// value lengths over all entries may not exceed it.
#[derive(Default)]
pub struct MemBackend {
    entries: RefCell<HashMap<String, String>>,
    capacity: Option<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that rejects writes once `capacity` bytes are in use.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Bytes currently in use (keys plus values).
    pub fn used_bytes(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(StartpageError::Store("Simulated write error".to_string()));
        }

        if let Some(capacity) = self.capacity {
            let existing = self
                .entries
                .borrow()
                .get(key)
                .map(|v| key.len() + v.len())
                .unwrap_or(0);
            let needed = self.used_bytes() - existing + key.len() + value.len();
            if needed > capacity {
                return Err(StartpageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    capacity,
                });
            }
        }

        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let store = MemBackend::new();
        assert_eq!(store.get("nope").unwrap(), None);
    }

    #[test]
    fn test_set_get_remove() {
        let store = MemBackend::new();
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("2".to_string()));
        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
        store.remove("a").unwrap();
    }

    #[test]
    fn test_capacity_rejects_oversized_write() {
        let store = MemBackend::with_capacity(10);
        store.set("k", "12345").unwrap();
        let err = store.set("j", "123456789").unwrap_err();
        assert!(matches!(err, StartpageError::QuotaExceeded { capacity: 10, .. }));
        // The previous value is untouched.
        assert_eq!(store.get("k").unwrap(), Some("12345".to_string()));
        assert_eq!(store.get("j").unwrap(), None);
    }

    #[test]
    fn test_capacity_counts_replaced_value_once() {
        let store = MemBackend::with_capacity(10);
        store.set("k", "123456789").unwrap();
        store.set("k", "987654321").unwrap();
        assert_eq!(store.used_bytes(), 10);
    }

    #[test]
    fn test_simulated_write_error() {
        let store = MemBackend::new();
        store.set_simulate_write_error(true);
        assert!(store.set("k", "v").is_err());
        store.set_simulate_write_error(false);
        assert!(store.set("k", "v").is_ok());
    }
}
