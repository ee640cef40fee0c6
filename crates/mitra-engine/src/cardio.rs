//! Report-based cardiovascular composite score.

use mitra_core::models::cardio::CardioRiskScore;
use mitra_core::models::classification::ClassifiedParameter;
use mitra_core::models::report::CategorizedReport;
use mitra_guidelines::GuidelineTable;
use tracing::{debug, warn};

pub struct CardioFactor {
    pub parameter: &'static str,
    pub weight: f64,
    /// Fixed `(midpoint, threshold)` for factors without clinical bands.
    /// Banded factors take both from their guideline entry.
    pub scale: Option<(f64, f64)>,
}

/// Required inputs in reporting order. Weights sum to 1.
pub const FACTORS: [CardioFactor; 4] = [
    // Middle of the 18-45 adult range, saturating at 65.
    CardioFactor {
        parameter: "age",
        weight: 0.25,
        scale: Some((31.5, 65.0)),
    },
    CardioFactor {
        parameter: "blood_pressure_systolic",
        weight: 0.30,
        scale: None,
    },
    CardioFactor {
        parameter: "cholesterol_total",
        weight: 0.25,
        scale: None,
    },
    CardioFactor {
        parameter: "blood_sugar_fasting",
        weight: 0.20,
        scale: None,
    },
];

const LIPID_MARKERS: &[&str] = &["cholesterol_total", "ldl", "hdl", "triglycerides", "lpa"];

pub const PATTERN_ALERT: &str = "Elevated cardiovascular risk pattern";

/// Score a categorized report. Any factor that is absent, incomplete or
/// whose guideline entry has no bounded normal range makes the score
/// `Insufficient` rather than a partial number.
pub fn cardio_score(table: &GuidelineTable, categorized: &CategorizedReport) -> CardioRiskScore {
    let mut missing = Vec::new();
    let mut total = 0.0;

    for factor in &FACTORS {
        let Some(parameter) = categorized.find(factor.parameter) else {
            missing.push(factor.parameter.to_string());
            continue;
        };
        match deviation(table, factor, parameter) {
            Some(deviation) => total += factor.weight * deviation,
            None => {
                warn!(parameter = factor.parameter, "guideline entry unusable for cardio score");
                missing.push(factor.parameter.to_string());
            }
        }
    }

    if !missing.is_empty() {
        debug!(?missing, "cardio score insufficient");
        return CardioRiskScore::insufficient(missing);
    }

    let score = (total * 100.0).round().clamp(0.0, 100.0) as u8;
    CardioRiskScore::calculated(score)
}

/// Upward deviation from the normal midpoint, scaled so the red-flag
/// threshold maps to 1.
fn deviation(table: &GuidelineTable, factor: &CardioFactor, parameter: &ClassifiedParameter) -> Option<f64> {
    let (mid, threshold) = match factor.scale {
        Some(scale) => scale,
        None => {
            let bands = &table.get(&parameter.key)?.bands;
            (bands.normal.midpoint()?, bands.upper_red_flag_threshold()?)
        }
    };
    if threshold <= mid {
        return None;
    }
    Some(((parameter.canonical_value() - mid) / (threshold - mid)).clamp(0.0, 1.0))
}

/// Flags reports with two or more lipid markers in the red-flag bucket.
pub fn pattern_alert(categorized: &CategorizedReport) -> Option<String> {
    let lipid_flags = categorized
        .red_flags
        .iter()
        .filter(|p| LIPID_MARKERS.contains(&p.key.as_str()))
        .count();
    (lipid_flags >= 2).then(|| PATTERN_ALERT.to_string())
}
