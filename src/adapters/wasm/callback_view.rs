use crate::platform::Platform;
use crate::ports::ViewPort;
use crate::widget::WidgetView;
use js_sys::Function;
use wasm_bindgen::JsValue;

/// Hands every view snapshot to a host-supplied render function.
pub struct CallbackView {
    callback: Option<Function>,
}

impl CallbackView {
    pub fn new(callback: Option<Function>) -> Self {
        Self { callback }
    }
}

impl ViewPort for CallbackView {
    fn render(&self, view: &WidgetView) {
        let Some(callback) = self.callback.as_ref() else {
            return;
        };

        let result = serde_wasm_bindgen::to_value(view)
            .map_err(JsValue::from)
            .and_then(|value| callback.call1(&JsValue::NULL, &value));
        if let Err(e) = result {
            Platform::new()
                .logger()
                .error(&format!("Render callback failed: {e:?}"));
        }
    }
}
