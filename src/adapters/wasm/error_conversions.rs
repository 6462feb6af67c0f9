use crate::domain::notification::NotificationError;
use wasm_bindgen::JsValue;

/// Conversion from JsValue to NotificationError for WASM infrastructure
impl From<JsValue> for NotificationError {
    fn from(err: JsValue) -> Self {
        NotificationError::storage(
            err.as_string()
                .unwrap_or_else(|| format!("{err:?}")),
        )
    }
}

/// Conversion from NotificationError to JsValue for WASM boundary
impl From<NotificationError> for JsValue {
    fn from(error: NotificationError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
