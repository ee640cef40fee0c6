use std::collections::HashMap;

use mitra_core::error::ValidationError;
use mitra_core::models::parameter::Parameter;
use mitra_core::models::patient::{Language, Sex};
use mitra_core::models::report::{ReportAnalysis, ReportMetadata, ReportView, RiskScores};
use mitra_guidelines::GuidelineTable;
use mitra_guidelines::normalize::normalize_name;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cardio::{cardio_score, pattern_alert};
use crate::categorize::categorize_for;
use crate::emergency::check_report_emergency;
use crate::error::EngineError;
use crate::explain::explain;

/// Body of every report endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
}

impl AnalysisRequest {
    pub fn sex(&self) -> Sex {
        self.sex.unwrap_or_default()
    }
}

/// Reject empty names, non-finite values and parameters that appear twice
/// under names normalising to the same string.
pub fn validate_parameters(parameters: &[Parameter]) -> Result<(), ValidationError> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    for (index, parameter) in parameters.iter().enumerate() {
        parameter.validate(index)?;
        if seen.insert(normalize_name(&parameter.name), index).is_some() {
            return Err(ValidationError::DuplicateParameter {
                parameter: parameter.name.clone(),
            });
        }
    }
    Ok(())
}

/// Validate, categorize, score and explain one report.
pub fn analyze(table: &GuidelineTable, request: &AnalysisRequest) -> Result<ReportAnalysis, EngineError> {
    validate_parameters(&request.parameters)?;

    let categorized = categorize_for(table, &request.parameters, request.sex());
    let cardiovascular = cardio_score(table, &categorized);
    let explanation_en = explain(&categorized, &cardiovascular, Language::En);
    let explanation_hi = explain(&categorized, &cardiovascular, Language::Hi);
    let emergency = check_report_emergency(&categorized);
    let pattern_alert = pattern_alert(&categorized);

    info!(
        guideline_version = table.version(),
        parameters = request.parameters.len(),
        red_flags = categorized.red_flags.len(),
        borderline = categorized.borderline.len(),
        incomplete = categorized.incomplete.len(),
        cardio = ?cardiovascular.status,
        emergency = emergency.is_emergency,
        "report analyzed"
    );

    Ok(ReportAnalysis {
        report: ReportView {
            categorized,
            risk_scores: RiskScores { cardiovascular },
            metadata: ReportMetadata {
                guideline_version: table.version().to_string(),
                pattern_alert,
            },
        },
        explanation_en,
        explanation_hi,
        emergency,
    })
}
