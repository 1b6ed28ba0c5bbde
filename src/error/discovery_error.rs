//! Unified error type for the discovery controller.

use std::fmt;

use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::source::SourceError;
use crate::models::DiscoveryCategory;

/// Unified error type for discovery operations.
///
/// Load and refresh failures wrap the [`SourceError`] that ended the
/// operation; the remaining variants are wiring and input errors.
#[derive(Debug)]
pub enum DiscoveryError {
    /// A category observation failed, ending the combined load.
    Load(SourceError),

    /// The bulk refresh failed.
    Refresh(SourceError),

    /// No observe use case was wired for a category.
    MissingUseCase { category: DiscoveryCategory },

    /// No refresh use case was wired.
    MissingRefreshUseCase,

    /// A category name from the view layer did not match any category.
    UnknownCategory { name: String },

    /// A configuration value could not be used.
    Config { key: String, message: String },

    /// Wrapped error with additional context.
    WithContext {
        error: Box<DiscoveryError>,
        context: ErrorContext,
    },
}

impl DiscoveryError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DiscoveryError::Load(err) | DiscoveryError::Refresh(err) => err.category(),
            DiscoveryError::MissingUseCase { .. }
            | DiscoveryError::MissingRefreshUseCase
            | DiscoveryError::Config { .. } => ErrorCategory::Configuration,
            DiscoveryError::UnknownCategory { .. } => ErrorCategory::Client,
            DiscoveryError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            DiscoveryError::Load(err) | DiscoveryError::Refresh(err) => err.is_retryable(),
            DiscoveryError::WithContext { error, .. } => error.is_retryable(),
            _ => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            DiscoveryError::Load(err) | DiscoveryError::Refresh(err) => err.user_message(),
            DiscoveryError::WithContext { error, .. } => error.user_message(),
            other => format!("{}. {}", other, other.category().recovery_hint()),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        DiscoveryError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            DiscoveryError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::Load(err) => write!(f, "Failed to load games: {}", err),
            DiscoveryError::Refresh(err) => write!(f, "Failed to refresh games: {}", err),
            DiscoveryError::MissingUseCase { category } => {
                write!(f, "No observe use case registered for {}", category)
            }
            DiscoveryError::MissingRefreshUseCase => {
                write!(f, "No refresh use case registered")
            }
            DiscoveryError::UnknownCategory { name } => {
                write!(f, "Unknown discovery category '{}'", name)
            }
            DiscoveryError::Config { key, message } => {
                write!(f, "Invalid configuration for {}: {}", key, message)
            }
            DiscoveryError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for DiscoveryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiscoveryError::Load(err) | DiscoveryError::Refresh(err) => Some(err),
            DiscoveryError::WithContext { error, .. } => {
                std::error::Error::source(error.as_ref())
            }
            _ => None,
        }
    }
}
