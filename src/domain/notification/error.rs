use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    ChannelOpenFailure(String),
    OutOfRange { index: i64, len: usize },
    MalformedPersistedState(String),
    Storage(String),
    Serialization(String),
    MissingAttribute(&'static str),
    AlreadyAttached,
    AttachCancelled,
}

impl fmt::Display for NotificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationError::ChannelOpenFailure(reason) => {
                write!(f, "Connection failed: {reason}")
            }
            NotificationError::OutOfRange { index, len } => {
                write!(f, "Notification index {index} out of range for {len} notifications")
            }
            NotificationError::MalformedPersistedState(msg) => {
                write!(f, "Malformed persisted notifications: {msg}")
            }
            NotificationError::Storage(msg) => write!(f, "Storage Error: {msg}"),
            NotificationError::Serialization(msg) => write!(f, "Serialization Error: {msg}"),
            NotificationError::MissingAttribute(name) => {
                write!(f, "Missing required attribute: {name}")
            }
            NotificationError::AlreadyAttached => write!(f, "Connection already attached"),
            NotificationError::AttachCancelled => {
                write!(f, "Connection detached before it finished opening")
            }
        }
    }
}

impl std::error::Error for NotificationError {}

impl NotificationError {
    pub fn channel_open_failure(reason: impl Into<String>) -> Self {
        NotificationError::ChannelOpenFailure(reason.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        NotificationError::Storage(message.into())
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        NotificationError::Serialization(message.into())
    }
}
