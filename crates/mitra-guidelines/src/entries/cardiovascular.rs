use mitra_core::models::classification::GuidelineSource;

use super::entry;
use crate::entry::GuidelineEntry;
use crate::range::{BandSet, Range};

/// Vitals and demographics used by the cardiovascular composite: AHA blood
/// pressure categories, resting heart rate, age, and WHO BMI classes.
pub fn entries() -> Vec<GuidelineEntry> {
    vec![
        entry(
            "blood_pressure_systolic",
            "Systolic Blood Pressure",
            &["Systolic", "Systolic BP", "SBP", "BP Systolic"],
            "mmHg",
            GuidelineSource::Aha,
            BandSet::normal(Range::between(90.0, 120.0))
                .borderline(Range::between(120.0, 130.0))
                .red_flag(Range::below(90.0))
                .red_flag(Range::between(130.0, 180.0))
                .critical(Range::at_least(180.0)),
        ),
        entry(
            "blood_pressure_diastolic",
            "Diastolic Blood Pressure",
            &["Diastolic", "Diastolic BP", "DBP", "BP Diastolic"],
            "mmHg",
            GuidelineSource::Aha,
            BandSet::normal(Range::between(60.0, 80.0))
                .borderline(Range::between(80.0, 90.0))
                .red_flag(Range::below(60.0))
                .red_flag(Range::between(90.0, 120.0))
                .critical(Range::at_least(120.0)),
        ),
        entry(
            "heart_rate",
            "Heart Rate",
            &["Pulse", "Pulse Rate", "HR", "Resting Heart Rate"],
            "bpm",
            GuidelineSource::Aha,
            BandSet::normal(Range::between(60.0, 100.0))
                .borderline(Range::between(40.0, 60.0))
                .borderline(Range::between(100.0, 120.0))
                .red_flag(Range::between(120.0, 150.0))
                .critical(Range::below(40.0))
                .critical(Range::at_least(150.0)),
        ),
        entry(
            "age",
            "Age",
            &["Patient Age", "Age (years)"],
            "years",
            GuidelineSource::ClinicalLaboratory,
            // Demographic, never flagged. Carried so the cardio score can read it.
            BandSet::normal(Range::unbounded()),
        ),
        entry(
            "bmi",
            "BMI",
            &["Body Mass Index"],
            "kg/m²",
            GuidelineSource::Who,
            BandSet::normal(Range::between(18.5, 25.0))
                .borderline(Range::between(16.0, 18.5))
                .borderline(Range::between(25.0, 30.0))
                .red_flag(Range::below(16.0))
                .red_flag(Range::at_least(30.0)),
        ),
    ]
}
