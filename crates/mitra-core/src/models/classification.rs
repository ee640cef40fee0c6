use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::parameter::Measurement;

/// The body whose published thresholds a guideline entry encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GuidelineSource {
    #[serde(rename = "ADA")]
    Ada,
    #[serde(rename = "AHA")]
    Aha,
    #[serde(rename = "WHO")]
    Who,
    #[serde(rename = "NKF")]
    Nkf,
    #[serde(rename = "Endocrine Society")]
    EndocrineSociety,
    #[serde(rename = "Clinical Laboratory")]
    ClinicalLaboratory,
}

impl GuidelineSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuidelineSource::Ada => "ADA",
            GuidelineSource::Aha => "AHA",
            GuidelineSource::Who => "WHO",
            GuidelineSource::Nkf => "NKF",
            GuidelineSource::EndocrineSociety => "Endocrine Society",
            GuidelineSource::ClinicalLaboratory => "Clinical Laboratory",
        }
    }
}

impl std::fmt::Display for GuidelineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification outcome. `High` and `Low` share a severity with `Critical`
/// but keep the direction visible to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Status {
    Normal,
    Borderline,
    High,
    Low,
    Critical,
}

impl Status {
    /// 0 = normal, 1 = borderline, 2 = red flag.
    pub fn severity(&self) -> u8 {
        match self {
            Status::Normal => 0,
            Status::Borderline => 1,
            Status::High | Status::Low | Status::Critical => 2,
        }
    }

    pub fn is_abnormal(&self) -> bool {
        self.severity() > 0
    }
}

/// Where a value sits relative to the normal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Direction {
    Within,
    Above,
    Below,
}

/// A parameter matched to a guideline entry and placed in a severity band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassifiedParameter {
    /// Name as it appeared in the input.
    pub parameter: String,
    /// Canonical guideline key the name resolved to.
    pub key: String,
    pub value: f64,
    pub unit: String,
    /// Present only when the input unit differed from the guideline unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub converted: Option<Measurement>,
    pub status: Status,
    pub direction: Direction,
    pub severity: u8,
    pub classification_used: GuidelineSource,
    pub guideline_reference: String,
}

impl ClassifiedParameter {
    /// The value in the guideline's own unit.
    pub fn canonical_value(&self) -> f64 {
        self.converted.as_ref().map_or(self.value, |m| m.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IncompleteReason {
    /// No guideline entry matches the name.
    UnknownParameter,
    /// The entry exists but the unit has no conversion path.
    UnitMismatch,
    /// The value falls outside every band of the entry.
    OutOfCoverage,
}

/// A parameter that could not be classified. Data-quality signal, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IncompleteMarker {
    pub parameter: String,
    pub reason: IncompleteReason,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Classified(ClassifiedParameter),
    Incomplete(IncompleteMarker),
}

impl Classification {
    pub fn severity(&self) -> Option<u8> {
        match self {
            Classification::Classified(p) => Some(p.severity),
            Classification::Incomplete(_) => None,
        }
    }
}
