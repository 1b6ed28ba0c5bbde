//! Errors raised by the games data sources.

use thiserror::Error;

use super::category::ErrorCategory;

/// Failure of an observation or refresh collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Timed out during {operation}")]
    Timeout { operation: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("{message}")]
    Other { message: String },
}

impl SourceError {
    pub fn network(message: impl Into<String>) -> Self {
        SourceError::Network {
            message: message.into(),
        }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        SourceError::Http {
            status,
            message: message.into(),
        }
    }

    pub fn timeout(operation: impl Into<String>) -> Self {
        SourceError::Timeout {
            operation: operation.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        SourceError::Storage {
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        SourceError::Other {
            message: message.into(),
        }
    }

    /// High-level category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SourceError::Network { .. } | SourceError::Timeout { .. } => ErrorCategory::Network,
            SourceError::Http { status, .. } if *status >= 500 || *status == 429 => {
                ErrorCategory::Server
            }
            SourceError::Http { .. } => ErrorCategory::Client,
            SourceError::Storage { .. } => ErrorCategory::Storage,
            SourceError::Other { .. } => ErrorCategory::Client,
        }
    }

    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SourceError::Network { .. } => {
                "Unable to reach the games service. Check your connection.".to_string()
            }
            SourceError::Timeout { .. } => "The games service took too long to respond.".to_string(),
            SourceError::Http { status: 429, .. } => {
                "Too many requests. Please wait a moment and try again.".to_string()
            }
            SourceError::Http { status, .. } if *status >= 500 => {
                format!("The games service is unavailable (error {}).", status)
            }
            SourceError::Http { status, .. } => format!("Request failed (error {}).", status),
            SourceError::Storage { .. } => "Unable to save games locally.".to_string(),
            SourceError::Other { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SourceError::network("refused").to_string(), "Network error: refused");
        assert_eq!(SourceError::http(503, "busy").to_string(), "HTTP 503: busy");
        assert_eq!(
            SourceError::timeout("refresh POPULAR").to_string(),
            "Timed out during refresh POPULAR"
        );
    }

    #[test]
    fn test_http_status_category() {
        assert_eq!(SourceError::http(500, "x").category(), ErrorCategory::Server);
        assert_eq!(SourceError::http(429, "x").category(), ErrorCategory::Server);
        assert_eq!(SourceError::http(404, "x").category(), ErrorCategory::Client);
    }

    #[test]
    fn test_retryable() {
        assert!(SourceError::network("x").is_retryable());
        assert!(SourceError::timeout("refresh").is_retryable());
        assert!(!SourceError::storage("disk full").is_retryable());
        assert!(!SourceError::other("bad input").is_retryable());
    }

    #[test]
    fn test_user_message() {
        assert!(SourceError::network("x").user_message().contains("connection"));
        assert!(SourceError::http(502, "x").user_message().contains("502"));
        assert_eq!(SourceError::other("Custom").user_message(), "Custom");
    }
}
