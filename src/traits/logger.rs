//! Error logging sink.

use crate::error::DiscoveryError;

/// Receives operation failures from the controller.
///
/// Implementations must not panic; a failed write is dropped.
pub trait Logger: Send + Sync {
    fn error(&self, tag: &str, message: &str, error: &DiscoveryError);
}
