use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::alert::EmergencyAssessment;
use super::cardio::CardioRiskScore;
use super::classification::{ClassifiedParameter, IncompleteMarker};

/// A report partitioned by severity. Every input parameter lands in exactly
/// one bucket, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategorizedReport {
    pub red_flags: Vec<ClassifiedParameter>,
    pub borderline: Vec<ClassifiedParameter>,
    pub normal: Vec<ClassifiedParameter>,
    pub incomplete: Vec<IncompleteMarker>,
    pub remedies: Vec<String>,
}

impl CategorizedReport {
    /// Total number of parameters across the four buckets.
    pub fn len(&self) -> usize {
        self.red_flags.len() + self.borderline.len() + self.normal.len() + self.incomplete.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Red flags then borderline.
    pub fn abnormal(&self) -> impl Iterator<Item = &ClassifiedParameter> {
        self.red_flags.iter().chain(&self.borderline)
    }

    /// Every parameter that was matched to a guideline entry.
    pub fn classified(&self) -> impl Iterator<Item = &ClassifiedParameter> {
        self.abnormal().chain(&self.normal)
    }

    pub fn find(&self, key: &str) -> Option<&ClassifiedParameter> {
        self.classified().find(|p| p.key == key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskScores {
    pub cardiovascular: CardioRiskScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportMetadata {
    /// Identifier of the guideline table the report was classified against.
    pub guideline_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub pattern_alert: Option<String>,
}

/// The categorized report together with its derived scores, as rendered by
/// the report explainer screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportView {
    #[serde(flatten)]
    pub categorized: CategorizedReport,
    pub risk_scores: RiskScores,
    pub metadata: ReportMetadata,
}

/// Full response for one analyzed report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportAnalysis {
    pub report: ReportView,
    pub explanation_en: String,
    pub explanation_hi: String,
    pub emergency: EmergencyAssessment,
}
