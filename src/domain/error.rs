//! Error types for Unit API operations.
//!
//! This module defines the custom error types used throughout the Unit
//! client operations, providing structured error handling with helpful messages.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Custom error type for Unit client operations.
///
/// This enum provides specific error variants for different failure modes
/// encountered when querying the Unit operations API.
#[derive(Debug, Error)]
pub enum UnitError {
    /// Network-related errors from HTTP requests.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream rejected the request with a non-2xx status.
    ///
    /// `message` carries the upstream `error` body field when the body was
    /// parseable, otherwise a plain `HTTP {status}` description.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the upstream service.
        status: u16,
        /// Human-readable error message, preferring the upstream error body.
        message: String,
    },

    /// JSON parsing or data structure errors.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of what failed to parse.
        message: String,
    },

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl UnitError {
    /// Create a new API error for the given status and message.
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a new parse error with the given message.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_prefers_message() {
        let err = UnitError::api(404, "address not found");
        assert_eq!(format!("{}", err), "address not found");
    }

    #[test]
    fn test_api_error_with_status_fallback() {
        let err = UnitError::api(502, "HTTP 502");
        match err {
            UnitError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "HTTP 502");
            }
            _ => panic!("Expected Api variant"),
        }
    }

    #[test]
    fn test_parse_error_creation() {
        let err = UnitError::parse("invalid JSON");
        match err {
            UnitError::Parse { message } => assert_eq!(message, "invalid JSON"),
            _ => panic!("Expected Parse variant"),
        }
        let err = UnitError::parse("bad body");
        assert_eq!(format!("{}", err), "Parse error: bad body");
    }

    #[test]
    fn test_invalid_input_error_creation() {
        let err = UnitError::invalid_input("empty address");
        assert_eq!(format!("{}", err), "Invalid input: empty address");
    }
}
