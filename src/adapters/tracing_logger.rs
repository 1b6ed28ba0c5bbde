//! [`Logger`] backed by `tracing`.

use tracing::{error, warn};

use crate::error::DiscoveryError;
use crate::traits::Logger;

/// Forwards controller failures to the `tracing` subscriber.
///
/// Transient failures are logged at warn level since the next refresh may
/// recover; everything else is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, tag: &str, message: &str, err: &DiscoveryError) {
        let category = err.category();
        if err.is_retryable() {
            warn!(tag, %category, retryable = true, error = %err, "{message}");
        } else {
            error!(tag, %category, retryable = false, error = %err, "{message}");
        }
    }
}
