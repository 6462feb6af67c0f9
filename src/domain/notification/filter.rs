use super::types::NotificationRecord;

/// Returns true when the record is addressed to `viewer_id`.
///
/// Comparison is byte-exact: no trimming and no case folding.
pub fn admit(record: &NotificationRecord, viewer_id: &str) -> bool {
    record.reference == viewer_id
}
