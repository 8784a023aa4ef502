//! Clipboard error types
//!
//! Every failure a copy attempt can run into ends up here. Errors are cloned
//! into reactive state, so causes are kept as message text rather than as
//! live JS values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The permission probe answered `denied`
    #[error("Clipboard write permission denied")]
    PermissionDenied,

    /// The async clipboard write was rejected
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),

    /// The legacy selection-and-copy command threw or was rejected
    #[error("Legacy copy failed: {0}")]
    LegacyCopyFailed(String),

    /// The permission subsystem could not answer the query
    #[error("Clipboard permission query failed: {0}")]
    PermissionQueryFailed(String),

    /// A required host object (window, document, element) is missing
    #[error("{0} is not available")]
    HostUnavailable(String),
}

impl ClipboardError {
    /// Returns true if the error came from the user or browser refusing access
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_message() {
        let err = ClipboardError::PermissionDenied;
        assert_eq!(err.to_string(), "Clipboard write permission denied");
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_messages_carry_cause() {
        assert_eq!(
            ClipboardError::WriteFailed("NotAllowedError".to_string()).to_string(),
            "Clipboard write failed: NotAllowedError"
        );
        assert_eq!(
            ClipboardError::HostUnavailable("document".to_string()).to_string(),
            "document is not available"
        );
        assert!(!ClipboardError::LegacyCopyFailed("x".to_string()).is_permission_denied());
    }
}
