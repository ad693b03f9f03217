//! Best-effort "already fired" flags over tab-scoped storage.
//!
//! Every failure reads as "not fired yet": a duplicate event is cheaper than
//! a lost one, and the backend dedups on `eventID` anyway.

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::utils::browser;

/// Marker stored by [`DedupStore::mark_fired`].
pub const FIRED_MARKER: &str = "1";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}

/// `getItem`/`setItem`, either of which may fail.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.sessionStorage`, cleared when the tab's session ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSessionStorage;

impl BrowserSessionStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = browser::window().ok_or(StorageError::Unavailable)?;
        match window.session_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable),
            Err(e) => Err(StorageError::Access(format!("{:?}", e))),
        }
    }
}

impl KeyValueStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// In-process map with the same contract as session storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub trait DedupStore {
    /// True iff a marker is stored for `key`. Unknown counts as not fired.
    fn was_fired(&self, key: &str) -> bool;

    /// Stores `marker` for `key`, ignoring write failures.
    fn mark_fired_with(&self, key: &str, marker: &str);

    fn mark_fired(&self, key: &str) {
        self.mark_fired_with(key, FIRED_MARKER);
    }
}

/// Fail-open [`DedupStore`] over any [`KeyValueStorage`].
#[derive(Debug, Default)]
pub struct StorageDedupStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> StorageDedupStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStorage> DedupStore for StorageDedupStore<S> {
    fn was_fired(&self, key: &str) -> bool {
        match self.storage.get_item(key) {
            Ok(Some(marker)) => !marker.is_empty(),
            Ok(None) => false,
            Err(e) => {
                log::warn!("Dedup lookup for {} failed, treating as not fired: {}", key, e);
                false
            }
        }
    }

    fn mark_fired_with(&self, key: &str, marker: &str) {
        if let Err(e) = self.storage.set_item(key, marker) {
            log::warn!("Could not record {} as fired: {}", key, e);
        }
    }
}

/// Dedup store backed by the current tab's session storage.
pub fn session_store() -> StorageDedupStore<BrowserSessionStorage> {
    StorageDedupStore::new(BrowserSessionStorage)
}
