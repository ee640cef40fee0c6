//! Bilingual emergency alerts for vitals and classified reports.

use mitra_core::models::alert::{AlertSeverity, EmergencyAlert, EmergencyAssessment};
use mitra_core::models::classification::{ClassifiedParameter, Status};
use mitra_core::models::report::CategorizedReport;
use mitra_core::models::vitals::{VitalField, VitalsInput};
use tracing::warn;

use crate::explain::format_value;
use crate::phrases;

struct VitalLimit {
    field: VitalField,
    parameter: &'static str,
    unit: &'static str,
    below: Option<f64>,
    above: Option<f64>,
    message_en: &'static str,
    message_hi: &'static str,
}

// `{value}` is replaced with the measured value.
const VITAL_LIMITS: &[VitalLimit] = &[
    VitalLimit {
        field: VitalField::BloodPressureSystolic,
        parameter: "blood_pressure_systolic",
        unit: "mmHg",
        below: None,
        above: Some(180.0),
        message_en: "Hypertensive crisis: blood pressure {value} mmHg. Call emergency services now.",
        message_hi: "बीपी बहुत ज़्यादा है: {value} mmHg। तुरंत आपातकालीन सेवा को बुलाएं।",
    },
    VitalLimit {
        field: VitalField::BloodSugarFasting,
        parameter: "blood_sugar_fasting",
        unit: "mg/dL",
        below: None,
        above: Some(400.0),
        message_en: "Diabetic emergency: blood sugar {value} mg/dL. Go to a hospital immediately.",
        message_hi: "शुगर इमरजेंसी: {value} mg/dL। तुरंत अस्पताल जाएं।",
    },
    VitalLimit {
        field: VitalField::HeartRate,
        parameter: "heart_rate",
        unit: "bpm",
        below: Some(40.0),
        above: Some(150.0),
        message_en: "Cardiac alert: heart rate {value} bpm is dangerous. Seek emergency care.",
        message_hi: "हृदय चेतावनी: हृदय गति {value} bpm खतरनाक है। तुरंत डॉक्टर से मिलें।",
    },
];

/// Red flags on these keys raise a warning even outside the critical band.
const WARNING_KEYS: &[&str] = &["hemoglobin", "creatinine", "blood_sugar_fasting", "hba1c"];

pub fn check_vitals_emergency(vitals: &VitalsInput) -> EmergencyAssessment {
    let alerts = VITAL_LIMITS
        .iter()
        .filter_map(|limit| {
            let value = vitals.field(limit.field)?;
            let outside = limit.below.is_some_and(|b| value < b) || limit.above.is_some_and(|a| value > a);
            outside.then(|| {
                let shown = format_value(value);
                EmergencyAlert {
                    parameter: limit.parameter.to_string(),
                    value,
                    unit: limit.unit.to_string(),
                    severity: AlertSeverity::Critical,
                    message_en: limit.message_en.replace("{value}", &shown),
                    message_hi: limit.message_hi.replace("{value}", &shown),
                }
            })
        })
        .collect::<Vec<_>>();

    if !alerts.is_empty() {
        warn!(alerts = alerts.len(), "vitals emergency detected");
    }
    EmergencyAssessment::from_alerts(alerts)
}

pub fn check_report_emergency(categorized: &CategorizedReport) -> EmergencyAssessment {
    let alerts = categorized
        .red_flags
        .iter()
        .filter_map(|p| match p.status {
            Status::Critical => Some(report_alert(p, AlertSeverity::Critical)),
            Status::High | Status::Low if WARNING_KEYS.contains(&p.key.as_str()) => {
                Some(report_alert(p, AlertSeverity::Warning))
            }
            _ => None,
        })
        .collect::<Vec<_>>();

    let assessment = EmergencyAssessment::from_alerts(alerts);
    if assessment.is_emergency {
        warn!(alerts = assessment.total_alerts, "critical values in report");
    }
    assessment
}

fn report_alert(p: &ClassifiedParameter, severity: AlertSeverity) -> EmergencyAlert {
    let value = format_value(p.value);
    let name_hi = phrases::lookup(&p.key).map_or(p.parameter.as_str(), |ph| ph.name_hi);
    let (message_en, message_hi) = match severity {
        AlertSeverity::Critical => (
            format!(
                "Critical: {} {value} {} is in the critical range ({}). Seek medical care immediately.",
                p.parameter, p.unit, p.guideline_reference
            ),
            format!(
                "गंभीर: {name_hi} {value} {} गंभीर सीमा में है ({})। तुरंत चिकित्सा सहायता लें।",
                p.unit, p.guideline_reference
            ),
        ),
        _ => (
            format!(
                "Warning: {} {value} {} is outside the safe range and needs prompt review by a doctor.",
                p.parameter, p.unit
            ),
            format!(
                "चेतावनी: {name_hi} {value} {} सुरक्षित सीमा से बाहर है, जल्द डॉक्टर को दिखाएं।",
                p.unit
            ),
        ),
    };
    EmergencyAlert {
        parameter: p.parameter.clone(),
        value: p.value,
        unit: p.unit.clone(),
        severity,
        message_en,
        message_hi,
    }
}
