//! Error taxonomy shared by the frontend call boundaries. Every variant
//! renders to a single human-readable message; the UI shows at most one
//! message per action and never clears the table on failure.

use thiserror::Error;

/// Retrieval of the order collection failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// The backend answered with a non-success status.
    #[error("Failed to load orders: HTTP {status} {message}")]
    Http { status: u16, message: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the expected page envelope.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// A status change was rejected before or after dispatch.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    /// The target code is empty or outside the enumeration; no request
    /// is made in this case.
    #[error("Invalid status")]
    InvalidStatus,

    /// The backend rejected the transition.
    #[error("Status change failed: HTTP {status}")]
    Http { status: u16 },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
}

/// Malformed local input, caught before any request is built.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Enter a valid user id")]
    InvalidUserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_carries_status() {
        let err = FetchError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_transition_error_messages() {
        assert_eq!(TransitionError::InvalidStatus.to_string(), "Invalid status");
        assert!(TransitionError::Http { status: 409 }
            .to_string()
            .contains("409"));
    }

    #[test]
    fn test_validation_error_message() {
        assert_eq!(
            ValidationError::InvalidUserId.to_string(),
            "Enter a valid user id"
        );
    }
}
