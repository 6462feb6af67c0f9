/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// The domain layer only talks to these traits. Browser implementations live in
/// `adapters::wasm`, in-memory ones in `adapters::native`.

pub mod channel;
pub mod logger;
pub mod notifier;
pub mod store;
pub mod view;

pub use channel::{ChannelFactoryPort, ChannelPort, InboundHandler, Subscription};
pub use logger::LoggerPort;
pub use notifier::NotifierPort;
pub use store::LocalStorePort;
pub use view::ViewPort;
