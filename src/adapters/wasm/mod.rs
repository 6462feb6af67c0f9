/// WASM adapters - implementations using browser APIs.

pub mod callback_view;
pub mod console_logger;
pub mod element_notifier;
pub mod error_conversions;
pub mod hub_channel;
pub mod local_storage;

pub use callback_view::CallbackView;
pub use console_logger::ConsoleLogger;
pub use element_notifier::ElementNotifier;
pub use hub_channel::{HubChannel, HubConnection, JsChannelFactory};
pub use local_storage::LocalStorage;
