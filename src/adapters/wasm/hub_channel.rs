use crate::domain::notification::{NotificationError, NotificationRecord};
use crate::platform::Platform;
use crate::ports::{ChannelFactoryPort, ChannelPort, InboundHandler, Subscription};
use async_trait::async_trait;
use js_sys::{Function, Promise};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

#[wasm_bindgen]
extern "C" {
    /// Connection object built by the host page (SignalR `HubConnection` shape).
    #[derive(Clone)]
    pub type HubConnection;

    #[wasm_bindgen(method, catch)]
    fn start(this: &HubConnection) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn stop(this: &HubConnection) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &HubConnection, method_name: &str, handler: &Function);

    #[wasm_bindgen(method)]
    fn off(this: &HubConnection, method_name: &str, handler: &Function);
}

fn describe_js_error(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

type InboundClosure = Closure<dyn FnMut(JsValue, JsValue)>;

pub struct HubChannel {
    connection: HubConnection,
    handlers: RefCell<HashMap<u64, InboundClosure>>,
    next_id: Cell<u64>,
}

impl HubChannel {
    pub fn new(connection: HubConnection) -> Self {
        Self {
            connection,
            handlers: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl ChannelPort for HubChannel {
    async fn start(&self) -> Result<(), NotificationError> {
        let promise = self
            .connection
            .start()
            .map_err(|e| NotificationError::channel_open_failure(describe_js_error(&e)))?;

        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| NotificationError::channel_open_failure(describe_js_error(&e)))
    }

    fn subscribe(&self, event: &str, mut handler: InboundHandler) -> Subscription {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let event_name = event.to_string();
        let closure = Closure::wrap(Box::new(move |reference: JsValue, key: JsValue| {
            match (reference.as_string(), key.as_string()) {
                (Some(reference), Some(key)) => handler(NotificationRecord::new(reference, key)),
                _ => Platform::new().logger().warn(&format!(
                    "Ignoring {event_name} with non-string arguments: {reference:?}, {key:?}"
                )),
            }
        }) as Box<dyn FnMut(JsValue, JsValue)>);

        self.connection
            .on(event, closure.as_ref().unchecked_ref());
        self.handlers.borrow_mut().insert(id, closure);

        Subscription::new(id, event)
    }

    fn unsubscribe(&self, subscription: &Subscription) {
        let closure = self.handlers.borrow_mut().remove(&subscription.id());
        if let Some(closure) = closure {
            self.connection
                .off(subscription.event(), closure.as_ref().unchecked_ref());
        }
    }

    fn stop(&self) {
        match self.connection.stop() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    Platform::new()
                        .logger()
                        .warn(&format!("Connection stop failed: {}", describe_js_error(&e)));
                }
            }),
            Err(e) => Platform::new()
                .logger()
                .warn(&format!("Connection stop failed: {}", describe_js_error(&e))),
        }
    }
}

/// Builds channels with a host function `(url) => HubConnection`.
pub struct JsChannelFactory {
    factory: Function,
}

impl JsChannelFactory {
    pub fn new(factory: Function) -> Self {
        Self { factory }
    }
}

impl ChannelFactoryPort for JsChannelFactory {
    fn create(&self, endpoint_url: &str) -> Result<Rc<dyn ChannelPort>, NotificationError> {
        let connection = self
            .factory
            .call1(&JsValue::NULL, &JsValue::from_str(endpoint_url))
            .map_err(|e| NotificationError::channel_open_failure(describe_js_error(&e)))?;

        if connection.is_null() || connection.is_undefined() {
            return Err(NotificationError::channel_open_failure(
                "Connection factory returned no connection",
            ));
        }

        Ok(Rc::new(HubChannel::new(connection.unchecked_into())))
    }
}
