/// Native adapters - in-process implementations for non-WASM targets and tests.

pub mod console_logger;
pub mod loopback_channel;
pub mod memory_store;
pub mod recording_notifier;
pub mod recording_view;

pub use console_logger::ConsoleLogger;
pub use loopback_channel::{ChannelOp, LoopbackChannel, LoopbackFactory, StartBehavior};
pub use memory_store::MemoryStore;
pub use recording_notifier::{HostEvent, RecordingNotifier};
pub use recording_view::RecordingView;
