use crate::domain::notification::NotificationRecord;

/// Outbound events towards the hosting page.
pub trait NotifierPort {
    /// A record was admitted and appended.
    fn notify_received(&self, record: &NotificationRecord) -> Result<(), String>;

    /// A record was removed by the viewer.
    fn notify_deleted(&self, record: &NotificationRecord) -> Result<(), String>;

    /// The channel could not be opened.
    fn notify_connection_failed(&self, reason: &str) -> Result<(), String>;
}
