use crate::domain::notification::NotificationError;
use wasm_bindgen::prelude::*;
use web_sys::{DedicatedWorkerGlobalScope, Storage, Window};

pub fn get_global_scope() -> Result<JsValue, NotificationError> {
    // Try worker scope first
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Ok(JsValue::from(scope));
    }

    let window = web_sys::window().ok_or_else(|| {
        NotificationError::storage("Neither DedicatedWorkerGlobalScope nor Window found")
    })?;
    Ok(JsValue::from(window))
}

pub fn window() -> Result<Window, NotificationError> {
    get_global_scope()?
        .dyn_into::<Window>()
        .map_err(|_| NotificationError::storage("localStorage is only available on Window"))
}

pub fn get_local_storage() -> Result<Storage, NotificationError> {
    window()?
        .local_storage()?
        .ok_or_else(|| NotificationError::storage("localStorage is disabled"))
}
