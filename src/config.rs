use crate::domain::notification::NotificationError;

/// Storage key holding the persisted notification list.
pub const STORAGE_KEY: &str = "notifications";

/// Channel event carrying `(reference, notificationKey)`.
pub const RECEIVE_MESSAGE_EVENT: &str = "ReceiveMessage";

/// Host-page event names.
pub const HOST_RECEIVED_EVENT: &str = "ReceiveMessage";
pub const HOST_CONNECTION_FAILED_EVENT: &str = "connection-failed";

/// Host element property holding the optional deletion callback.
pub const DELETION_CALLBACK_PROPERTY: &str = "onNotificationDeleted";

pub const VIEWER_ATTRIBUTE: &str = "currentLoggedUserId";
pub const CONNECTION_URL_ATTRIBUTE: &str = "connectionUrl";

/// Configuration read from the host element when the widget attaches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachConfig {
    pub viewer_id: String,
    pub endpoint_url: String,
}

impl AttachConfig {
    pub fn new(viewer_id: impl Into<String>, endpoint_url: impl Into<String>) -> Self {
        Self {
            viewer_id: viewer_id.into(),
            endpoint_url: endpoint_url.into(),
        }
    }

    /// Builds the configuration from an attribute lookup.
    ///
    /// Absent and empty attributes are both rejected.
    pub fn from_attributes<F>(attribute: F) -> Result<Self, NotificationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            attribute(name)
                .filter(|value| !value.is_empty())
                .ok_or(NotificationError::MissingAttribute(name))
        };

        Ok(Self {
            viewer_id: required(VIEWER_ATTRIBUTE)?,
            endpoint_url: required(CONNECTION_URL_ATTRIBUTE)?,
        })
    }
}

/// Per-instance settings fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOptions {
    pub storage_key: String,
    pub inbound_event: String,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            inbound_event: RECEIVE_MESSAGE_EVENT.to_string(),
        }
    }
}
