use crate::ports::LoggerPort;
use std::io::Write;

/// Native logger: informational lines on stdout, warnings and errors on
/// stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }

    fn emit(mut out: impl Write, level: &str, message: &str) {
        // A closed pipe must not take the widget down.
        let _ = writeln!(out, "[{level}] {message}");
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        Self::emit(std::io::stdout(), "LOG", message);
    }

    fn error(&self, message: &str) {
        Self::emit(std::io::stderr(), "ERROR", message);
    }

    fn warn(&self, message: &str) {
        Self::emit(std::io::stderr(), "WARN", message);
    }

    fn time(&self, label: &str) {
        Self::emit(std::io::stdout(), "TIME:START", label);
    }

    fn time_end(&self, label: &str) {
        Self::emit(std::io::stdout(), "TIME:END", label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_formats_level_and_message() {
        let mut buffer = Vec::new();
        ConsoleLogger::emit(&mut buffer, "WARN", "store unavailable");
        assert_eq!(String::from_utf8(buffer).unwrap(), "[WARN] store unavailable\n");
    }

    #[test]
    fn test_logger_all_methods() {
        let logger = ConsoleLogger::new();
        logger.log("test log");
        logger.warn("test warn");
        logger.error("test error");
        logger.time("test_timer");
        logger.time_end("test_timer");
    }
}
