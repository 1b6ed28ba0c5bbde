//! Error handling for the discovery controller.
//!
//! - **Source errors**: [`SourceError`], raised by data-source collaborators
//! - **Unified error**: [`DiscoveryError`], returned by controller operations
//! - **Categories**: [`ErrorCategory`], for retry and messaging decisions
//! - **Context**: [`ErrorContext`] and [`ResultExt`] for debugging detail
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, DNS, timeout | Yes |
//! | Server | Upstream 5xx / rate limit | Yes |
//! | Storage | Local cache writes | No |
//! | Client | Bad request, unknown input | No |
//! | Configuration | Missing wiring or bad config | No |
//!
//! Load failures are logged and swallowed; refresh failures are logged and
//! surfaced to the user as a message. Neither is fatal.

mod category;
mod context;
mod discovery_error;
mod result;
mod source;

pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use discovery_error::DiscoveryError;
pub use result::{DiscoveryResult, ResultExt};
pub use source::SourceError;
