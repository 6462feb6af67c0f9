use super::error::NotificationError;
use super::types::NotificationRecord;

pub fn encode_list(records: &[NotificationRecord]) -> Result<String, NotificationError> {
    serde_json::to_string(records)
        .map_err(|e| NotificationError::serialization(format!("Failed to serialize notifications: {e}")))
}

/// Parses a stored notification list.
///
/// Anything other than a JSON array of `{reference, notificationKey}`
/// objects is rejected as a whole.
pub fn decode_list(text: &str) -> Result<Vec<NotificationRecord>, NotificationError> {
    serde_json::from_str::<Vec<NotificationRecord>>(text)
        .map_err(|e| NotificationError::MalformedPersistedState(e.to_string()))
}
