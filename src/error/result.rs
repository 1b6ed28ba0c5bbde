//! Result type alias for discovery operations.

use super::context::ErrorContext;
use super::discovery_error::DiscoveryError;

/// Type alias for Results using DiscoveryError.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    fn context(self, ctx: ErrorContext) -> DiscoveryResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> DiscoveryResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T> ResultExt<T> for DiscoveryResult<T> {
    fn context(self, ctx: ErrorContext) -> DiscoveryResult<T> {
        self.map_err(|e| e.with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> DiscoveryResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
