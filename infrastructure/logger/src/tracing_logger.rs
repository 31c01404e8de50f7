use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business-layer log lines to `tracing` under a fixed target,
/// so `RUST_LOG=storefront::business=debug` narrows them down.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

const TARGET: &str = "storefront::business";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn should_be_usable_as_logger_port() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        logger.info("info line");
        logger.warn("warn line");
        logger.error("error line");
        logger.debug("debug line");
    }
}
