/// Global logger instance - automatically selects implementation based on build target.
///
/// The browser console is used on wasm32, stdout/stderr everywhere else.

use crate::ports::LoggerPort;
use once_cell::sync::Lazy;

use super::ConsoleLogger;

pub static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

/// Get the global logger instance.
#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}
