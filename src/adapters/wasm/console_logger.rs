use crate::ports::LoggerPort;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Browser console logger. Messages are prefixed so the widget's lines can
/// be filtered in devtools.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    prefix: &'static str,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            prefix: "[notification-bell]",
        }
    }

    fn line(&self, message: &str) -> JsValue {
        JsValue::from_str(&format!("{} {message}", self.prefix))
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        console::log_1(&self.line(message));
    }

    fn error(&self, message: &str) {
        console::error_1(&self.line(message));
    }

    fn warn(&self, message: &str) {
        console::warn_1(&self.line(message));
    }

    fn time(&self, label: &str) {
        console::time_with_label(label);
    }

    fn time_end(&self, label: &str) {
        console::time_end_with_label(label);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_logger_all_methods() {
        let logger = ConsoleLogger::new();
        logger.log("test log");
        logger.warn("test warn");
        logger.error("test error");
        logger.time("test_timer");
        logger.time_end("test_timer");
    }
}
