use mitra_core::models::classification::GuidelineSource;

use super::entry;
use crate::entry::GuidelineEntry;
use crate::range::{BandSet, Range};

/// ADA Standards of Care: fasting plasma glucose and HbA1c.
/// Prediabetes 100–125 mg/dL / 5.7–6.4 %; diabetes ≥126 mg/dL / ≥6.5 %.
/// Hypoglycaemia level 1 below 70 mg/dL, level 2 below 54 mg/dL.
pub fn entries() -> Vec<GuidelineEntry> {
    vec![
        entry(
            "blood_sugar_fasting",
            "Fasting Blood Sugar",
            &[
                "Fasting Sugar",
                "FBS",
                "Fasting Glucose",
                "Fasting Plasma Glucose",
                "FPG",
                "Glucose (Fasting)",
                "Glucose",
                "Blood Sugar Fasting",
            ],
            "mg/dL",
            GuidelineSource::Ada,
            BandSet::normal(Range::between(70.0, 100.0))
                .borderline(Range::between(54.0, 70.0))
                .borderline(Range::between(100.0, 126.0))
                .red_flag(Range::below(54.0))
                .red_flag(Range::between(126.0, 300.0))
                .critical(Range::at_least(300.0)),
        ),
        entry(
            "hba1c",
            "HbA1c",
            &["Hb A1c", "A1C", "Glycated Hemoglobin", "Glycated Haemoglobin", "Glycosylated Hemoglobin"],
            "%",
            GuidelineSource::Ada,
            BandSet::normal(Range::below(5.7))
                .borderline(Range::between(5.7, 6.5))
                .red_flag(Range::between(6.5, 10.0))
                .critical(Range::at_least(10.0)),
        ),
    ]
}
