use crate::domain::notification::NotificationError;
use crate::ports::LocalStorePort;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory key-value store standing in for browser `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    reject_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store, as if a previous page load had written `value`.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Makes every subsequent `save` fail, like a full storage quota.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }
}

impl LocalStorePort for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, NotificationError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), NotificationError> {
        if self.reject_writes.get() {
            return Err(NotificationError::storage("Quota exceeded"));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
