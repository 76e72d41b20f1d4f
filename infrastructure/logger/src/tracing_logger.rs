use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case log lines to `tracing` under the `shop` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "shop", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "shop", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "shop", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "shop", "{}", message);
    }
}
