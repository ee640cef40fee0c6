use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::Sex;
use crate::error::ValidationError;

/// A directly supplied vitals record, as submitted by the risk predictor form.
///
/// Optional numeric fields left at `0` by the form are treated as not measured.
/// BMI may be given directly or derived from `height` (cm) and `weight` (kg).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalsInput {
    pub age: f64,
    pub gender: Sex,
    #[serde(default)]
    pub bmi: Option<f64>,
    #[serde(default, rename = "height")]
    pub height_cm: Option<f64>,
    #[serde(default, rename = "weight")]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub blood_pressure_systolic: Option<f64>,
    #[serde(default)]
    pub blood_pressure_diastolic: Option<f64>,
    #[serde(default)]
    pub blood_sugar_fasting: Option<f64>,
    #[serde(default)]
    pub cholesterol_total: Option<f64>,
    #[serde(default)]
    pub heart_rate: Option<f64>,
    #[serde(default)]
    pub smoking: bool,
    #[serde(default)]
    pub family_history_diabetes: bool,
    #[serde(default)]
    pub family_history_heart: bool,
    #[serde(default)]
    pub exercise_minutes_weekly: u32,
}

/// Numeric fields a risk rule can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalField {
    Age,
    Bmi,
    BloodPressureSystolic,
    BloodPressureDiastolic,
    BloodSugarFasting,
    CholesterolTotal,
    HeartRate,
    ExerciseMinutesWeekly,
}

/// Boolean fields a risk rule can test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VitalFlag {
    Smoking,
    FamilyHistoryDiabetes,
    FamilyHistoryHeart,
}

/// Plausibility ceilings for submitted measurements.
const LIMITS: &[(&str, f64)] = &[
    ("age", 130.0),
    ("bmi", 150.0),
    ("height", 300.0),
    ("weight", 700.0),
    ("blood_pressure_systolic", 350.0),
    ("blood_pressure_diastolic", 250.0),
    ("blood_sugar_fasting", 2000.0),
    ("cholesterol_total", 2000.0),
    ("heart_rate", 350.0),
];

fn measured(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

impl VitalsInput {
    /// Explicit BMI wins; otherwise it is derived from height and weight,
    /// rounded to one decimal.
    pub fn bmi(&self) -> Option<f64> {
        if let Some(bmi) = measured(self.bmi) {
            return Some(bmi);
        }
        let height_m = measured(self.height_cm)? / 100.0;
        let weight = measured(self.weight_kg)?;
        Some((weight / (height_m * height_m) * 10.0).round() / 10.0)
    }

    pub fn field(&self, field: VitalField) -> Option<f64> {
        match field {
            VitalField::Age => Some(self.age),
            VitalField::Bmi => self.bmi(),
            VitalField::BloodPressureSystolic => measured(self.blood_pressure_systolic),
            VitalField::BloodPressureDiastolic => measured(self.blood_pressure_diastolic),
            VitalField::BloodSugarFasting => measured(self.blood_sugar_fasting),
            VitalField::CholesterolTotal => measured(self.cholesterol_total),
            VitalField::HeartRate => measured(self.heart_rate),
            VitalField::ExerciseMinutesWeekly => Some(f64::from(self.exercise_minutes_weekly)),
        }
    }

    pub fn flag(&self, flag: VitalFlag) -> bool {
        match flag {
            VitalFlag::Smoking => self.smoking,
            VitalFlag::FamilyHistoryDiabetes => self.family_history_diabetes,
            VitalFlag::FamilyHistoryHeart => self.family_history_heart,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let values = [
            ("age", Some(self.age)),
            ("bmi", self.bmi),
            ("height", self.height_cm),
            ("weight", self.weight_kg),
            ("blood_pressure_systolic", self.blood_pressure_systolic),
            ("blood_pressure_diastolic", self.blood_pressure_diastolic),
            ("blood_sugar_fasting", self.blood_sugar_fasting),
            ("cholesterol_total", self.cholesterol_total),
            ("heart_rate", self.heart_rate),
        ];

        for (field, value) in values {
            let Some(value) = value else { continue };
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteValue {
                    parameter: field.to_string(),
                });
            }
            let max = LIMITS
                .iter()
                .find(|(name, _)| *name == field)
                .map_or(f64::MAX, |(_, max)| *max);
            if value < 0.0 || value > max {
                return Err(ValidationError::OutOfRange {
                    field: field.to_string(),
                    value,
                    min: 0.0,
                    max,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// `<30` low, `30–59` moderate, `≥60` high.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..30 => RiskLevel::Low,
            30..60 => RiskLevel::Moderate,
            _ => RiskLevel::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VitalsRiskResult {
    pub diabetes_risk: u32,
    pub diabetes_level: RiskLevel,
    pub heart_risk: u32,
    pub heart_level: RiskLevel,
    pub recommendations: Vec<String>,
    /// Ids of the rules that fired, in rule-table order.
    pub triggered_rules: Vec<String>,
}
