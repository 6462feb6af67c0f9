use crate::domain::notification::NotificationError;
use crate::global::get_local_storage;
use crate::ports::LocalStorePort;

/// `window.localStorage` adapter.
#[derive(Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl LocalStorePort for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, NotificationError> {
        let storage = get_local_storage()?;
        storage
            .get_item(key)
            .map_err(|_| NotificationError::storage("Failed to read from localStorage"))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), NotificationError> {
        let storage = get_local_storage()?;
        storage
            .set_item(key, value)
            .map_err(|_| NotificationError::storage("Failed to write to localStorage"))
    }
}
