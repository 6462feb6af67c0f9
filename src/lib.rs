#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod platform;
pub mod ports;

pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod global;
pub mod widget;

#[cfg(target_arch = "wasm32")]
pub mod facades;

pub use config::{AttachConfig, WidgetOptions};
pub use domain::connection::{ConnectionManager, ConnectionState};
pub use domain::notification::{NotificationError, NotificationList, NotificationRecord};
pub use platform::{Platform, WidgetPorts};
pub use widget::{NotificationWidget, WidgetView};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
