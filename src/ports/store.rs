use crate::domain::notification::NotificationError;

/// Port for durable client-side key-value storage.
///
/// Writes are synchronous and overwrite the previous value of the key.
pub trait LocalStorePort {
    /// Returns `Ok(None)` when the key has never been written.
    fn load(&self, key: &str) -> Result<Option<String>, NotificationError>;

    fn save(&self, key: &str, value: &str) -> Result<(), NotificationError>;
}
