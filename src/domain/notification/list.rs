use super::error::NotificationError;
use super::serialization::{decode_list, encode_list};
use super::types::NotificationRecord;
use crate::platform::Platform;
use crate::ports::{LocalStorePort, NotifierPort};
use std::cell::RefCell;
use std::rc::Rc;

/// Ordered notification list mirrored into the local store.
///
/// Every mutation rewrites the whole stored value. Host notifications are
/// sent after the internal borrow is released, so a host listener may call
/// back into the list.
pub struct NotificationList {
    platform: Platform,
    key: String,
    records: RefCell<Vec<NotificationRecord>>,
    store: Rc<dyn LocalStorePort>,
    notifier: Rc<dyn NotifierPort>,
}

impl NotificationList {
    /// Reads the persisted list under `key`. Never fails: a missing or
    /// malformed value yields an empty list and leaves the store untouched.
    pub fn load(
        platform: Platform,
        key: impl Into<String>,
        store: Rc<dyn LocalStorePort>,
        notifier: Rc<dyn NotifierPort>,
    ) -> Self {
        let key = key.into();

        let records = match store.load(&key) {
            Ok(Some(text)) => match decode_list(&text) {
                Ok(records) => records,
                Err(e) => {
                    platform
                        .logger()
                        .warn(&format!("Ignoring stored notifications: {e}"));
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                platform
                    .logger()
                    .warn(&format!("Failed to read stored notifications: {e}"));
                Vec::new()
            }
        };

        Self {
            platform,
            key,
            records: RefCell::new(records),
            store,
            notifier,
        }
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NotificationRecord> {
        self.records.borrow().get(index).cloned()
    }

    pub fn snapshot(&self) -> Vec<NotificationRecord> {
        self.records.borrow().clone()
    }

    /// Overwrites the stored value with the current list.
    pub fn persist(&self) -> Result<(), NotificationError> {
        let text = encode_list(&self.records.borrow())?;
        self.store.save(&self.key, &text)
    }

    /// Appends `record`, persists, then emits the received event.
    ///
    /// Repeated deliveries are kept as separate entries.
    pub fn append(&self, record: NotificationRecord) {
        self.records.borrow_mut().push(record.clone());
        self.persist_or_log();

        if let Err(e) = self.notifier.notify_received(&record) {
            self.platform
                .logger()
                .error(&format!("Failed to dispatch received notification: {e}"));
        }
    }

    /// Removes the record at `index`, persists, then runs the deletion
    /// callback with it.
    pub fn remove_at(&self, index: usize) -> Result<NotificationRecord, NotificationError> {
        let removed = {
            let mut records = self.records.borrow_mut();
            if index >= records.len() {
                return Err(NotificationError::OutOfRange {
                    index: i64::try_from(index).unwrap_or(i64::MAX),
                    len: records.len(),
                });
            }
            records.remove(index)
        };
        self.persist_or_log();

        if let Err(e) = self.notifier.notify_deleted(&removed) {
            self.platform
                .logger()
                .error(&format!("Deletion callback failed: {e}"));
        }

        Ok(removed)
    }

    fn persist_or_log(&self) {
        if let Err(e) = self.persist() {
            self.platform
                .logger()
                .error(&format!("Failed to persist notifications: {e}"));
        }
    }
}
