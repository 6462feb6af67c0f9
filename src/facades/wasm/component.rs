use super::converters;
use crate::adapters::wasm::{CallbackView, ElementNotifier, JsChannelFactory, LocalStorage};
use crate::config::{AttachConfig, WidgetOptions};
use crate::domain::notification::NotificationError;
use crate::platform::{Platform, WidgetPorts};
use crate::widget::NotificationWidget;
use js_sys::{Function, Promise};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::HtmlElement;

/// Notification bell bound to a host element.
///
/// The host forwards its own lifecycle: `attach()` from `connectedCallback`,
/// `detach()` from `disconnectedCallback`.
#[wasm_bindgen]
pub struct NotificationComponent {
    host: HtmlElement,
    widget: Rc<NotificationWidget>,
}

#[wasm_bindgen]
impl NotificationComponent {
    /// `connection_factory` is called as `(url) => connection` on attach;
    /// `render`, when given, receives a view snapshot after every change.
    #[wasm_bindgen(constructor)]
    pub fn new(
        host: HtmlElement,
        connection_factory: Function,
        render: Option<Function>,
    ) -> NotificationComponent {
        let ports = WidgetPorts {
            store: Rc::new(LocalStorage::new()),
            channels: Rc::new(JsChannelFactory::new(connection_factory)),
            notifier: Rc::new(ElementNotifier::new(host.clone())),
            view: Rc::new(CallbackView::new(render)),
        };

        NotificationComponent {
            host,
            widget: Rc::new(NotificationWidget::new(ports, WidgetOptions::default())),
        }
    }

    /// Reads `currentLoggedUserId` and `connectionUrl` from the host element
    /// and connects.
    ///
    /// Resolves with the resulting connection state; a failed connection is
    /// logged and announced with `connection-failed`, not rejected. Rejects
    /// only when an attribute is missing or the widget is already attached.
    pub fn attach(&self) -> Promise {
        let host = self.host.clone();
        let widget = Rc::clone(&self.widget);

        future_to_promise(async move {
            let config = AttachConfig::from_attributes(|name| host.get_attribute(name))
                .map_err(|e| {
                    Platform::new().logger().error(&e.to_string());
                    converters::to_js_error(e)
                })?;

            match widget.attach(config).await {
                Ok(())
                | Err(NotificationError::ChannelOpenFailure(_))
                | Err(NotificationError::AttachCancelled) => {
                    Ok(JsValue::from_str(widget.connection_state().as_str()))
                }
                Err(e) => Err(converters::to_js_error(e)),
            }
        })
    }

    pub fn detach(&self) {
        self.widget.detach();
    }

    #[wasm_bindgen(js_name = toggleVisibility)]
    pub fn toggle_visibility(&self) {
        self.widget.toggle();
    }

    /// Removes the notification at `index` and returns it.
    #[wasm_bindgen(js_name = deleteNotification)]
    pub fn delete_notification(&self, index: f64) -> Result<JsValue, JsValue> {
        let removed = self
            .widget
            .delete(converters::js_index(index))
            .map_err(converters::to_js_error)?;
        converters::to_js_value(&removed)
    }

    #[wasm_bindgen(getter)]
    pub fn notifications(&self) -> Result<JsValue, JsValue> {
        converters::to_js_value(&self.widget.notifications())
    }

    #[wasm_bindgen(getter, js_name = hasNewMessage)]
    pub fn has_new_message(&self) -> bool {
        self.widget.view().has_new_message
    }

    #[wasm_bindgen(getter, js_name = isVisible)]
    pub fn is_visible(&self) -> bool {
        self.widget.view().is_visible
    }

    #[wasm_bindgen(getter, js_name = connectionState)]
    pub fn connection_state(&self) -> String {
        self.widget.connection_state().as_str().to_string()
    }
}
