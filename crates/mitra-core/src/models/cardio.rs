use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CardioStatus {
    Calculated,
    Insufficient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CardioLevel {
    Low,
    Moderate,
    High,
}

impl CardioLevel {
    /// `<40` low, `40–69` moderate, `≥70` high.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..40 => CardioLevel::Low,
            40..70 => CardioLevel::Moderate,
            _ => CardioLevel::High,
        }
    }
}

/// Composite cardiovascular score. `score` and `level` are present iff the
/// status is `Calculated`; `missing` is populated iff it is `Insufficient`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CardioRiskScore {
    pub status: CardioStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub level: Option<CardioLevel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

impl CardioRiskScore {
    pub fn calculated(score: u8) -> Self {
        let score = score.min(100);
        Self {
            status: CardioStatus::Calculated,
            score: Some(score),
            level: Some(CardioLevel::from_score(score)),
            missing: Vec::new(),
        }
    }

    pub fn insufficient(missing: Vec<String>) -> Self {
        Self {
            status: CardioStatus::Insufficient,
            score: None,
            level: None,
            missing,
        }
    }
}
