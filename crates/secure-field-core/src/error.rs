//! Error types for secure-field.

use thiserror::Error;

/// The main error type for secure-field operations.
///
/// Every variant is recoverable: the operation that produced it left the
/// widget in the state it had before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecureFieldError {
    /// Plain-text visibility was requested while the field does not allow
    /// showing the password in plain text.
    #[error("plain-text display is not allowed for this field")]
    PlainTextDisallowed,

    /// Signal-related error.
    #[error("signal error: {0}")]
    Signal(#[from] SignalError),

    /// Field options could not be loaded or failed validation.
    #[error("invalid field options: {0}")]
    Options(String),
}

/// Signal-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("invalid or disconnected connection ID")]
    InvalidConnection,
}

/// A specialized Result type for secure-field operations.
pub type Result<T> = std::result::Result<T, SecureFieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SecureFieldError::PlainTextDisallowed.to_string(),
            "plain-text display is not allowed for this field"
        );
        let err: SecureFieldError = SignalError::InvalidConnection.into();
        assert_eq!(err.to_string(), "signal error: invalid or disconnected connection ID");
    }
}
