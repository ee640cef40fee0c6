use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// Malformed input rejected before any classification or scoring happens.
#[derive(Debug, Clone, PartialEq, Serialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationError {
    #[error("parameter at index {index} has an empty name")]
    EmptyName { index: usize },

    #[error("parameter '{parameter}' has a non-finite value")]
    NonFiniteValue { parameter: String },

    #[error("parameter '{parameter}' appears more than once")]
    DuplicateParameter { parameter: String },

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("malformed payload: {message}")]
    Malformed { message: String },
}
