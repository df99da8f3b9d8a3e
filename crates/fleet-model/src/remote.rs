use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a failure reported by a remote control plane.
///
/// `Validation` is the class a control plane uses when a request references
/// a resource that does not exist in the shape the request expects, e.g. a
/// stack that was never created for a nodegroup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    Validation,
    NotFound,
    AccessDenied,
    Throttling,
    Unavailable,
    Other,
}

impl ErrorKind {
    /// Short label value used in logs and metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::AccessDenied => "access_denied",
            ErrorKind::Throttling => "throttling",
            ErrorKind::Unavailable => "unavailable",
            ErrorKind::Other => "other",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Failure returned by a remote control-plane call.
///
/// Displays as the bare message so callers can wrap it with their own context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ControlPlaneError {
    kind: ErrorKind,
    message: String,
}

impl ControlPlaneError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a [`ErrorKind::Validation`] failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Shorthand for an unclassified failure.
    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Other, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_message_only() {
        let err = ControlPlaneError::validation("Stack with id foo does not exist");
        assert_eq!(err.to_string(), "Stack with id foo does not exist");
        assert!(err.is_validation());
        assert_eq!(err.kind().as_label(), "validation");
    }
}
