use crate::domain::notification::NotificationRecord;
use crate::ports::NotifierPort;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Received(NotificationRecord),
    Deleted(NotificationRecord),
    ConnectionFailed(String),
}

/// Native notifier adapter.
///
/// There is no host page outside the browser; events are kept in order so
/// callers can inspect what would have been dispatched.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: RefCell<Vec<HostEvent>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.events.borrow().clone()
    }

    pub fn received(&self) -> Vec<NotificationRecord> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                HostEvent::Received(record) => Some(record.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl NotifierPort for RecordingNotifier {
    fn notify_received(&self, record: &NotificationRecord) -> Result<(), String> {
        self.events
            .borrow_mut()
            .push(HostEvent::Received(record.clone()));
        Ok(())
    }

    fn notify_deleted(&self, record: &NotificationRecord) -> Result<(), String> {
        self.events
            .borrow_mut()
            .push(HostEvent::Deleted(record.clone()));
        Ok(())
    }

    fn notify_connection_failed(&self, reason: &str) -> Result<(), String> {
        self.events
            .borrow_mut()
            .push(HostEvent::ConnectionFailed(reason.to_string()));
        Ok(())
    }
}
