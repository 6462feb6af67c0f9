use serde::{Deserialize, Serialize};

/// A notification addressed to one viewer.
///
/// Field order is part of the persisted format: `reference` is written
/// before `notificationKey`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    pub reference: String,
    pub notification_key: String,
}

impl NotificationRecord {
    pub fn new(reference: impl Into<String>, notification_key: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            notification_key: notification_key.into(),
        }
    }

    /// Text shown for the record in the notification list.
    pub fn label(&self) -> String {
        format!("{}: {}", self.reference, self.notification_key)
    }
}
