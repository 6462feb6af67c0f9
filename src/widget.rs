use crate::config::{AttachConfig, WidgetOptions};
use crate::domain::connection::{ConnectionManager, ConnectionState};
use crate::domain::notification::{admit, NotificationError, NotificationList, NotificationRecord};
use crate::platform::{Platform, WidgetPorts};
use crate::ports::{InboundHandler, NotifierPort, ViewPort};
use serde::Serialize;
use std::cell::Cell;
use std::rc::Rc;

/// Everything the host needs to draw the bell and its list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetView {
    pub notifications: Vec<NotificationRecord>,
    pub is_visible: bool,
    pub has_new_message: bool,
}

#[derive(Default)]
struct Indicator {
    visible: Cell<bool>,
    has_new_message: Cell<bool>,
}

fn snapshot(list: &NotificationList, indicator: &Indicator) -> WidgetView {
    WidgetView {
        notifications: list.snapshot(),
        is_visible: indicator.visible.get(),
        has_new_message: indicator.has_new_message.get(),
    }
}

fn render(list: &NotificationList, indicator: &Indicator, view: &dyn ViewPort) {
    view.render(&snapshot(list, indicator));
}

/// One notification bell bound to a host element.
///
/// The persisted list is usable as soon as the widget exists, whatever
/// happens to the connection afterwards.
pub struct NotificationWidget {
    platform: Platform,
    options: WidgetOptions,
    list: Rc<NotificationList>,
    indicator: Rc<Indicator>,
    connection: ConnectionManager,
    notifier: Rc<dyn NotifierPort>,
    view: Rc<dyn ViewPort>,
}

impl NotificationWidget {
    pub fn new(ports: WidgetPorts, options: WidgetOptions) -> Self {
        let platform = Platform::new();
        let list = Rc::new(NotificationList::load(
            platform,
            options.storage_key.clone(),
            Rc::clone(&ports.store),
            Rc::clone(&ports.notifier),
        ));

        let widget = Self {
            platform,
            options,
            list,
            indicator: Rc::new(Indicator::default()),
            connection: ConnectionManager::new(platform, ports.channels),
            notifier: ports.notifier,
            view: ports.view,
        };
        widget.render();
        widget
    }

    pub fn view(&self) -> WidgetView {
        snapshot(&self.list, &self.indicator)
    }

    pub fn notifications(&self) -> Vec<NotificationRecord> {
        self.list.snapshot()
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection.state()
    }

    /// Connects for `config.viewer_id`. Records addressed to anyone else
    /// are dropped.
    ///
    /// A channel that fails to open is reported to the host page and
    /// returned; the widget keeps working on the stored list.
    pub async fn attach(&self, config: AttachConfig) -> Result<(), NotificationError> {
        let handler = self.inbound_handler(config.viewer_id);

        match self
            .connection
            .attach(&config.endpoint_url, &self.options.inbound_event, handler)
            .await
        {
            Err(NotificationError::ChannelOpenFailure(reason)) => {
                if let Err(e) = self.notifier.notify_connection_failed(&reason) {
                    self.platform
                        .logger()
                        .error(&format!("Failed to dispatch connection failure: {e}"));
                }
                Err(NotificationError::ChannelOpenFailure(reason))
            }
            other => other,
        }
    }

    pub fn detach(&self) {
        self.connection.detach();
    }

    /// Shows or hides the list and clears the new-message indicator.
    pub fn toggle(&self) {
        self.indicator.visible.set(!self.indicator.visible.get());
        self.indicator.has_new_message.set(false);
        self.render();
    }

    /// Deletes the notification at `index` as displayed in the list.
    pub fn delete(&self, index: i64) -> Result<NotificationRecord, NotificationError> {
        let position = usize::try_from(index).map_err(|_| NotificationError::OutOfRange {
            index,
            len: self.list.len(),
        })?;

        let removed = self.list.remove_at(position)?;
        self.render();
        Ok(removed)
    }

    fn render(&self) {
        render(&self.list, &self.indicator, self.view.as_ref());
    }

    fn inbound_handler(&self, viewer_id: String) -> InboundHandler {
        let platform = self.platform;
        let list = Rc::clone(&self.list);
        let indicator = Rc::clone(&self.indicator);
        let view = Rc::clone(&self.view);

        Box::new(move |record: NotificationRecord| {
            if !admit(&record, &viewer_id) {
                return;
            }
            platform.logger().log(&format!(
                "ReceiveMessage: {} {}",
                record.reference, record.notification_key
            ));

            list.append(record);
            indicator.has_new_message.set(true);
            render(&list, &indicator, view.as_ref());
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::adapters::native::{
        HostEvent, LoopbackFactory, MemoryStore, RecordingNotifier, RecordingView, StartBehavior,
    };
    use crate::config::RECEIVE_MESSAGE_EVENT;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Weak;

    struct Harness {
        store: Rc<MemoryStore>,
        factory: Rc<LoopbackFactory>,
        notifier: Rc<RecordingNotifier>,
        view: Rc<RecordingView>,
        widget: NotificationWidget,
    }

    impl Harness {
        fn new(store: MemoryStore, behavior: StartBehavior) -> Self {
            let store = Rc::new(store);
            let factory = Rc::new(LoopbackFactory::new(behavior));
            let notifier = Rc::new(RecordingNotifier::new());
            let view = Rc::new(RecordingView::new());
            let widget = NotificationWidget::new(
                WidgetPorts {
                    store: store.clone(),
                    channels: factory.clone(),
                    notifier: notifier.clone(),
                    view: view.clone(),
                },
                WidgetOptions::default(),
            );
            Self {
                store,
                factory,
                notifier,
                view,
                widget,
            }
        }

        fn connected(viewer: &str) -> Self {
            let harness = Self::new(MemoryStore::new(), StartBehavior::Succeed);
            block_on(
                harness
                    .widget
                    .attach(AttachConfig::new(viewer, "loopback://hub")),
            )
            .unwrap();
            harness
        }

        fn deliver(&self, reference: &str, key: &str) {
            self.factory
                .last_channel()
                .unwrap()
                .deliver(RECEIVE_MESSAGE_EVENT, NotificationRecord::new(reference, key));
        }
    }

    #[test]
    fn test_admitted_message_is_stored_and_announced() {
        let harness = Harness::connected("u1");

        harness.deliver("u1", "k1");

        assert_eq!(harness.widget.notifications(), vec![NotificationRecord::new("u1", "k1")]);
        assert_eq!(
            harness.store.get("notifications").as_deref(),
            Some(r#"[{"reference":"u1","notificationKey":"k1"}]"#)
        );
        assert_eq!(
            harness.notifier.events(),
            vec![HostEvent::Received(NotificationRecord::new("u1", "k1"))]
        );
        assert!(harness.widget.view().has_new_message);
    }

    #[test]
    fn test_message_for_other_viewer_is_dropped() {
        let harness = Harness::connected("u1");

        harness.deliver("u2", "k2");

        assert!(harness.widget.notifications().is_empty());
        assert!(harness.notifier.events().is_empty());
        assert_eq!(harness.store.get("notifications"), None);
        assert!(!harness.widget.view().has_new_message);
    }

    #[test]
    fn test_toggle_flips_visibility_and_clears_indicator() {
        let harness = Harness::connected("u1");
        harness.deliver("u1", "k1");

        harness.widget.toggle();
        let view = harness.widget.view();
        assert!(view.is_visible);
        assert!(!view.has_new_message);

        harness.deliver("u1", "k2");
        assert!(harness.widget.view().has_new_message);

        harness.widget.toggle();
        let view = harness.widget.view();
        assert!(!view.is_visible);
        assert!(!view.has_new_message);
    }

    #[test]
    fn test_delete_removes_and_calls_back() {
        let harness = Harness::connected("u1");
        for key in ["A", "B", "C"] {
            harness.deliver("u1", key);
        }
        harness.notifier.clear();

        let removed = harness.widget.delete(1).unwrap();

        assert_eq!(removed, NotificationRecord::new("u1", "B"));
        assert_eq!(
            harness.widget.notifications(),
            vec![NotificationRecord::new("u1", "A"), NotificationRecord::new("u1", "C")]
        );
        assert_eq!(
            harness.store.get("notifications").as_deref(),
            Some(r#"[{"reference":"u1","notificationKey":"A"},{"reference":"u1","notificationKey":"C"}]"#)
        );
        assert_eq!(
            harness.notifier.events(),
            vec![HostEvent::Deleted(NotificationRecord::new("u1", "B"))]
        );
    }

    #[test]
    fn test_delete_rejects_negative_and_past_end() {
        let harness = Harness::connected("u1");
        assert_eq!(
            harness.widget.delete(-1),
            Err(NotificationError::OutOfRange { index: -1, len: 0 })
        );
        assert_eq!(
            harness.widget.delete(0),
            Err(NotificationError::OutOfRange { index: 0, len: 0 })
        );

        harness.deliver("u1", "A");
        assert_eq!(
            harness.widget.delete(1),
            Err(NotificationError::OutOfRange { index: 1, len: 1 })
        );
        assert_eq!(harness.widget.notifications().len(), 1);
    }

    #[test]
    fn test_connection_failure_is_announced_and_not_fatal() {
        let stored = r#"[{"reference":"u1","notificationKey":"old"}]"#;
        let harness = Harness::new(
            MemoryStore::with_entry("notifications", stored),
            StartBehavior::Fail("503".into()),
        );

        let result = block_on(
            harness
                .widget
                .attach(AttachConfig::new("u1", "loopback://hub")),
        );

        assert_eq!(result, Err(NotificationError::ChannelOpenFailure("503".into())));
        assert_eq!(harness.widget.connection_state(), ConnectionState::Failed);
        assert_eq!(
            harness.notifier.events(),
            vec![HostEvent::ConnectionFailed("503".into())]
        );

        harness.widget.toggle();
        assert!(harness.widget.view().is_visible);
        assert_eq!(harness.widget.delete(0).unwrap().notification_key, "old");
    }

    #[test]
    fn test_every_change_is_rendered() {
        let harness = Harness::connected("u1");
        let initial = harness.view.render_count();
        assert_eq!(initial, 1);

        harness.deliver("u1", "k1");
        harness.deliver("u2", "ignored");
        harness.widget.toggle();
        harness.widget.delete(0).unwrap();

        assert_eq!(harness.view.render_count(), initial + 3);
        assert_eq!(
            harness.view.last(),
            Some(WidgetView {
                notifications: Vec::new(),
                is_visible: true,
                has_new_message: false,
            })
        );
    }

    #[test]
    fn test_detach_stops_delivery() {
        let harness = Harness::connected("u1");
        harness.widget.detach();

        harness.deliver("u1", "late");

        assert_eq!(harness.widget.connection_state(), ConnectionState::Disconnected);
        assert!(harness.widget.notifications().is_empty());
    }

    #[test]
    fn test_view_serializes_for_the_host() {
        let harness = Harness::connected("u1");
        harness.deliver("u1", "k1");

        let json = serde_json::to_string(&harness.widget.view()).unwrap();
        assert_eq!(
            json,
            r#"{"notifications":[{"reference":"u1","notificationKey":"k1"}],"isVisible":false,"hasNewMessage":true}"#
        );
    }

    /// Host page that reacts to `ReceiveMessage` by calling straight back
    /// into the widget.
    struct CallingBackHost {
        recorder: RecordingNotifier,
        widget: RefCell<Weak<NotificationWidget>>,
        on_received: fn(&NotificationWidget),
    }

    impl NotifierPort for CallingBackHost {
        fn notify_received(&self, record: &NotificationRecord) -> Result<(), String> {
            self.recorder.notify_received(record)?;
            let widget = self.widget.borrow().upgrade();
            if let Some(widget) = widget {
                (self.on_received)(&widget);
            }
            Ok(())
        }

        fn notify_deleted(&self, record: &NotificationRecord) -> Result<(), String> {
            self.recorder.notify_deleted(record)
        }

        fn notify_connection_failed(&self, reason: &str) -> Result<(), String> {
            self.recorder.notify_connection_failed(reason)
        }
    }

    struct CallingBack {
        store: Rc<MemoryStore>,
        factory: Rc<LoopbackFactory>,
        host: Rc<CallingBackHost>,
        widget: Rc<NotificationWidget>,
    }

    fn calling_back(on_received: fn(&NotificationWidget)) -> CallingBack {
        let store = Rc::new(MemoryStore::new());
        let factory = Rc::new(LoopbackFactory::default());
        let host = Rc::new(CallingBackHost {
            recorder: RecordingNotifier::new(),
            widget: RefCell::new(Weak::new()),
            on_received,
        });
        let widget = Rc::new(NotificationWidget::new(
            WidgetPorts {
                store: store.clone(),
                channels: factory.clone(),
                notifier: host.clone(),
                view: Rc::new(RecordingView::new()),
            },
            WidgetOptions::default(),
        ));
        *host.widget.borrow_mut() = Rc::downgrade(&widget);
        block_on(widget.attach(AttachConfig::new("u1", "loopback://hub"))).unwrap();

        CallingBack {
            store,
            factory,
            host,
            widget,
        }
    }

    #[test]
    fn test_host_may_delete_from_received_listener() {
        let fixture = calling_back(|widget| {
            widget.delete(0).unwrap();
        });

        fixture
            .factory
            .last_channel()
            .unwrap()
            .deliver(RECEIVE_MESSAGE_EVENT, NotificationRecord::new("u1", "k1"));

        assert!(fixture.widget.notifications().is_empty());
        assert_eq!(fixture.store.get("notifications").as_deref(), Some("[]"));
        assert_eq!(
            fixture.host.recorder.events(),
            vec![
                HostEvent::Received(NotificationRecord::new("u1", "k1")),
                HostEvent::Deleted(NotificationRecord::new("u1", "k1")),
            ]
        );
        assert_eq!(fixture.widget.connection_state(), ConnectionState::Connected);
    }

    #[test]
    fn test_host_may_detach_from_received_listener() {
        let fixture = calling_back(|widget| widget.detach());
        let channel = fixture.factory.last_channel().unwrap();

        channel.deliver(RECEIVE_MESSAGE_EVENT, NotificationRecord::new("u1", "k1"));

        assert_eq!(
            fixture.widget.notifications(),
            vec![NotificationRecord::new("u1", "k1")]
        );
        assert_eq!(fixture.widget.connection_state(), ConnectionState::Disconnected);
        assert_eq!(channel.subscription_count(), 0);
        assert!(channel.is_stopped());
        assert_eq!(
            channel.deliver(RECEIVE_MESSAGE_EVENT, NotificationRecord::new("u1", "k2")),
            0
        );
    }
}
