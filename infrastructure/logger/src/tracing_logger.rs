use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use case logs to `tracing` under the `echosphere` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "echosphere", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "echosphere", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "echosphere", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "echosphere", "{}", message);
    }
}
