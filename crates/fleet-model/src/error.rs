use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid zone config: {0}")]
    InvalidZoneConfig(String),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ModelResult<T> = Result<T, ModelError>;
