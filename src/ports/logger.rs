/// Where the widget sends its diagnostics.
///
/// In the browser lines go to `console` with a `[notification-bell]` prefix;
/// native builds write info to stdout and warnings/errors to stderr.
pub trait LoggerPort: Send + Sync {
    fn log(&self, message: &str);

    fn error(&self, message: &str);

    fn warn(&self, message: &str);

    /// Starts a named timer; pair with [`LoggerPort::time_end`].
    fn time(&self, label: &str);

    /// Stops the timer started under `label` and reports how long it ran.
    fn time_end(&self, label: &str);
}
