use mitra_core::error::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to parse risk model: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid risk model: {0}")]
    InvalidModel(String),
}
