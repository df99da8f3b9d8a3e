use fleet_model::ControlPlaneError;
use thiserror::Error;

use crate::labels::StackError;

/// Failure of a label operation, carrying the backend error unchanged.
#[derive(Debug, Error)]
pub enum LabelError {
    #[error(transparent)]
    Stack(#[from] StackError),

    #[error(transparent)]
    Api(#[from] ControlPlaneError),
}
