//! Additive, table-driven risk model over a directly supplied vitals record.

use std::collections::HashSet;
use std::sync::LazyLock;

use mitra_core::models::vitals::{RiskLevel, VitalField, VitalFlag, VitalsInput, VitalsRiskResult};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::EngineError;

/// Upper bound on either risk total.
pub const MAX_RISK: u32 = 95;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Condition {
    /// Fires when the field is measured and strictly above the threshold.
    Above { field: VitalField, threshold: f64 },
    Flag { flag: VitalFlag },
}

impl Condition {
    pub fn holds(&self, vitals: &VitalsInput) -> bool {
        match self {
            Condition::Above { field, threshold } => vitals.field(*field).is_some_and(|v| v > *threshold),
            Condition::Flag { flag } => vitals.flag(*flag),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskRule {
    pub id: String,
    pub condition: Condition,
    #[serde(default)]
    pub diabetes_weight: u32,
    #[serde(default)]
    pub heart_weight: u32,
}

impl RiskRule {
    fn new(id: &str, condition: Condition, diabetes_weight: u32, heart_weight: u32) -> Self {
        Self {
            id: id.to_string(),
            condition,
            diabetes_weight,
            heart_weight,
        }
    }
}

/// Serialisable form of the additive model; [`Default`] is the built-in table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalsRiskModel {
    pub diabetes_baseline: u32,
    pub heart_baseline: u32,
    #[serde(default = "default_cap")]
    pub cap: u32,
    pub rules: Vec<RiskRule>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

fn default_cap() -> u32 {
    MAX_RISK
}

fn above(field: VitalField, threshold: f64) -> Condition {
    Condition::Above { field, threshold }
}

fn flag(flag: VitalFlag) -> Condition {
    Condition::Flag { flag }
}

impl Default for VitalsRiskModel {
    fn default() -> Self {
        Self {
            diabetes_baseline: 15,
            heart_baseline: 12,
            cap: MAX_RISK,
            rules: vec![
                RiskRule::new("age_over_45", above(VitalField::Age, 45.0), 15, 12),
                RiskRule::new("bmi_over_25", above(VitalField::Bmi, 25.0), 12, 10),
                RiskRule::new(
                    "fasting_sugar_over_100",
                    above(VitalField::BloodSugarFasting, 100.0),
                    18,
                    0,
                ),
                RiskRule::new(
                    "systolic_over_130",
                    above(VitalField::BloodPressureSystolic, 130.0),
                    0,
                    15,
                ),
                RiskRule::new(
                    "cholesterol_over_200",
                    above(VitalField::CholesterolTotal, 200.0),
                    0,
                    12,
                ),
                RiskRule::new("smoking", flag(VitalFlag::Smoking), 5, 15),
                RiskRule::new(
                    "family_history_diabetes",
                    flag(VitalFlag::FamilyHistoryDiabetes),
                    15,
                    0,
                ),
                RiskRule::new("family_history_heart", flag(VitalFlag::FamilyHistoryHeart), 0, 12),
            ],
            recommendations: [
                "Exercise at least 150 minutes/week",
                "Follow a balanced diet rich in fiber",
                "Monitor blood pressure regularly",
                "Get HbA1c test every 3 months",
                "Avoid smoking and excessive alcohol",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl VitalsRiskModel {
    /// The built-in rule table, shared process-wide.
    pub fn standard() -> &'static VitalsRiskModel {
        static STANDARD: LazyLock<VitalsRiskModel> = LazyLock::new(VitalsRiskModel::default);
        &STANDARD
    }

    /// Parse and validate a model from JSON.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let model: VitalsRiskModel = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.cap > MAX_RISK {
            return Err(EngineError::InvalidModel(format!(
                "cap {} exceeds {MAX_RISK}",
                self.cap
            )));
        }
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if rule.id.trim().is_empty() {
                return Err(EngineError::InvalidModel("rule with empty id".to_string()));
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(EngineError::InvalidModel(format!("duplicate rule id {}", rule.id)));
            }
            if matches!(rule.condition, Condition::Above { threshold, .. } if !threshold.is_finite()) {
                return Err(EngineError::InvalidModel(format!(
                    "rule {} has a non-finite threshold",
                    rule.id
                )));
            }
        }
        Ok(())
    }

    pub fn evaluate(&self, vitals: &VitalsInput) -> VitalsRiskResult {
        let mut diabetes = self.diabetes_baseline;
        let mut heart = self.heart_baseline;
        let mut triggered_rules = Vec::new();

        for rule in &self.rules {
            if rule.condition.holds(vitals) {
                diabetes = diabetes.saturating_add(rule.diabetes_weight);
                heart = heart.saturating_add(rule.heart_weight);
                triggered_rules.push(rule.id.clone());
            }
        }

        let diabetes_risk = diabetes.min(self.cap);
        let heart_risk = heart.min(self.cap);
        debug!(diabetes_risk, heart_risk, ?triggered_rules, "vitals risk evaluated");

        VitalsRiskResult {
            diabetes_risk,
            diabetes_level: RiskLevel::from_score(diabetes_risk),
            heart_risk,
            heart_level: RiskLevel::from_score(heart_risk),
            recommendations: self.recommendations.clone(),
            triggered_rules,
        }
    }
}

/// Score `vitals` with the built-in model.
pub fn predict_vitals_risk(vitals: &VitalsInput) -> VitalsRiskResult {
    VitalsRiskModel::standard().evaluate(vitals)
}
