use crate::config::{DELETION_CALLBACK_PROPERTY, HOST_CONNECTION_FAILED_EVENT, HOST_RECEIVED_EVENT};
use crate::domain::notification::NotificationRecord;
use js_sys::{Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, HtmlElement};

use crate::ports::NotifierPort;

#[derive(Serialize)]
struct ConnectionFailedDetail<'a> {
    reason: &'a str,
}

/// Dispatches host events as `CustomEvent`s on the host element.
#[derive(Clone)]
pub struct ElementNotifier {
    host: HtmlElement,
}

impl ElementNotifier {
    pub fn new(host: HtmlElement) -> Self {
        Self { host }
    }

    fn dispatch<T: Serialize>(&self, name: &str, detail: &T) -> Result<(), String> {
        let detail = serde_wasm_bindgen::to_value(detail)
            .map_err(|e| format!("Failed to serialize: {:?}", e))?;

        let init = CustomEventInit::new();
        init.set_detail(&detail);
        let event = CustomEvent::new_with_event_init_dict(name, &init)
            .map_err(|e| format!("{:?}", e))?;

        self.host
            .dispatch_event(&event)
            .map(|_| ())
            .map_err(|e| format!("{:?}", e))
    }
}

impl NotifierPort for ElementNotifier {
    fn notify_received(&self, record: &NotificationRecord) -> Result<(), String> {
        self.dispatch(HOST_RECEIVED_EVENT, record)
    }

    fn notify_deleted(&self, record: &NotificationRecord) -> Result<(), String> {
        let callback = Reflect::get(&self.host, &JsValue::from_str(DELETION_CALLBACK_PROPERTY))
            .map_err(|e| format!("{:?}", e))?;
        let Some(callback) = callback.dyn_ref::<Function>() else {
            return Ok(());
        };

        let value = serde_wasm_bindgen::to_value(record)
            .map_err(|e| format!("Failed to serialize: {:?}", e))?;
        callback
            .call1(&self.host, &value)
            .map(|_| ())
            .map_err(|e| format!("{:?}", e))
    }

    fn notify_connection_failed(&self, reason: &str) -> Result<(), String> {
        self.dispatch(
            HOST_CONNECTION_FAILED_EVENT,
            &ConnectionFailedDetail { reason },
        )
    }
}
