use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// One extracted lab marker or vital, as produced by the upstream parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Parameter {
    #[serde(rename = "parameter")]
    pub name: String,
    pub value: f64,
    pub unit: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
        }
    }

    /// Reject entries no classifier could reason about. `index` is the
    /// position in the submitted list, used only for the error message.
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName { index });
        }
        if !self.value.is_finite() {
            return Err(ValidationError::NonFiniteValue {
                parameter: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// A value expressed in a specific unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Measurement {
    pub value: f64,
    pub unit: String,
}
