use std::error::Error;

use async_trait::async_trait;
use fleet_model::{ControlPlaneError, Labels};
use thiserror::Error;

/// Boxed error returned by stack backends.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Failure of a [`StackService`] call.
///
/// `NotGoverned` means the nodegroup has no stack: it was created outside the
/// declarative path and its labels live only in the control plane. Every other
/// failure is `Failed` and must be surfaced as-is.
#[derive(Debug, Error)]
pub enum StackError {
    #[error("nodegroup is not managed by a stack: {0}")]
    NotGoverned(#[source] BoxError),

    #[error(transparent)]
    Failed(BoxError),
}

impl StackError {
    /// Classify a raw backend error.
    ///
    /// The error is `NotGoverned` when a validation-class [`ControlPlaneError`]
    /// appears anywhere in its `source()` chain, however deeply wrapped.
    pub fn classify<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        let err = err.into();
        if has_validation_cause(&*err) {
            StackError::NotGoverned(err)
        } else {
            StackError::Failed(err)
        }
    }

    #[cfg(test)]
    fn is_not_governed(&self) -> bool {
        matches!(self, StackError::NotGoverned(_))
    }
}

fn has_validation_cause(err: &(dyn Error + 'static)) -> bool {
    std::iter::successors(Some(err), |&e| e.source()).any(|e| {
        e.downcast_ref::<ControlPlaneError>()
            .is_some_and(ControlPlaneError::is_validation)
    })
}

/// Reads and writes nodegroup labels through the nodegroup's stack.
///
/// Implementations are bound to a single cluster.
#[async_trait]
pub trait StackService: Send + Sync + 'static {
    /// Labels recorded in the nodegroup's stack.
    async fn get_labels(&self, nodegroup: &str) -> Result<Labels, StackError>;

    /// Add or update `add_or_update` and drop `remove` in the nodegroup's stack.
    async fn update_labels(
        &self,
        nodegroup: &str,
        add_or_update: &Labels,
        remove: &[String],
    ) -> Result<(), StackError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_model::ErrorKind;

    #[derive(Debug, Error)]
    #[error("omg {context}: {source}")]
    struct Wrapped {
        context: &'static str,
        #[source]
        source: ControlPlaneError,
    }

    #[derive(Debug, Error)]
    #[error("outer: {0}")]
    struct Outer(#[source] Wrapped);

    #[test]
    fn bare_validation_error_is_not_governed() {
        let err = StackError::classify(ControlPlaneError::validation("ValidationError"));
        assert!(err.is_not_governed());
    }

    #[test]
    fn wrapped_validation_error_is_not_governed() {
        let err = StackError::classify(Outer(Wrapped {
            context: "what",
            source: ControlPlaneError::validation("ValidationError"),
        }));
        assert!(err.is_not_governed());
    }

    #[test]
    fn other_control_plane_errors_are_failures() {
        for kind in [
            ErrorKind::NotFound,
            ErrorKind::AccessDenied,
            ErrorKind::Throttling,
            ErrorKind::Unavailable,
            ErrorKind::Other,
        ] {
            let err = StackError::classify(Wrapped {
                context: "what",
                source: ControlPlaneError::new(kind, "boom"),
            });
            assert!(!err.is_not_governed(), "{kind} must not be classified as not governed");
        }
    }

    #[test]
    fn plain_errors_are_failures_and_display_verbatim() {
        let err = StackError::classify("something-terrible");
        assert!(matches!(err, StackError::Failed(_)));
        assert_eq!(err.to_string(), "something-terrible");
    }

    #[test]
    fn validation_text_without_a_typed_error_is_a_failure() {
        let err = StackError::classify("ValidationError");
        assert!(!err.is_not_governed());
    }
}
