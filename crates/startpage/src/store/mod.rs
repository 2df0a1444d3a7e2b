//! # Storage Layer
//!
//! The start page keeps all of its state in a small per-profile key-value
//! store: the notes blob, the theme override, the search history and the memo
//! text each live under one string key. [`KeyValueStore`] is that store.
//!
//! ## Contract
//!
//! - `get` of a key that was never written returns `Ok(None)`.
//! - `set` replaces the whole value. It may fail: storage can be full (quota)
//!   or disabled. Callers in the feature layer treat a failed write as a
//!   diagnostic, never as a reason to abort the user's action.
//! - Values are opaque strings; each feature owns the format of its key.
//!
//! ## Implementations
//!
//! - [`mem_backend::MemBackend`]: in-memory, with an optional byte capacity and
//!   a write-failure switch for exercising the failure paths.
//! - [`fs_backend::FsBackend`]: one file per key under a directory, written
//!   atomically.
//!
//! ## Sharing
//!
//! The trait takes `&self` everywhere (backends use interior mutability) and is
//! implemented for `Rc<T>`, so a page can hand the same store to every widget.
//!
//! ## Storage Layout (FsBackend)
//!
//! ```text
//! <root>/
//! ├── liquidGlassNotes.json
//! ├── theme.json
//! └── searchHistory.json
//! ```

use crate::error::Result;
use std::rc::Rc;

pub mod fs_backend;
pub mod mem_backend;

/// Durable string storage keyed by name.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Write `value` under `key`, logging instead of propagating a failure.
///
/// Returns whether the write landed. Every feature persists through this so a
/// full or disabled store never interrupts the page.
pub fn guarded_set<S: KeyValueStore + ?Sized>(store: &S, key: &str, value: &str) -> bool {
    match store.set(key, value) {
        Ok(()) => true,
        Err(err) => {
            log::error!(
                "event=store_write module=store status=error key={} bytes={} err={}",
                key,
                value.len(),
                err
            );
            false
        }
    }
}

/// Read `key`, treating a backend failure like a missing value.
pub fn guarded_get<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!(
                "event=store_read module=store status=error key={} err={}",
                key,
                err
            );
            None
        }
    }
}
