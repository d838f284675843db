use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Routes use case messages to `tracing` under a single target so they can be
/// filtered with `RUST_LOG=reservas=debug`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        debug!(target: "reservas", "{}", message);
    }
    fn info(&self, message: &str) {
        info!(target: "reservas", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "reservas", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "reservas", "{}", message);
    }
}
