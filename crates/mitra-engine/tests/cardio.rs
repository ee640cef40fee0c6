use mitra_core::models::cardio::{CardioLevel, CardioStatus};
use mitra_core::models::parameter::Parameter;
use mitra_engine::cardio::PATTERN_ALERT;
use mitra_engine::{cardio_score, categorize, pattern_alert};
use mitra_guidelines::GuidelineTable;

fn score_of(list: &[(&str, f64, &str)]) -> mitra_core::models::cardio::CardioRiskScore {
    let table = GuidelineTable::builtin();
    let input: Vec<Parameter> = list.iter().map(|(n, v, u)| Parameter::new(*n, *v, *u)).collect();
    cardio_score(table, &categorize(table, &input))
}

#[test]
fn missing_factors_are_listed_in_required_order() {
    let score = score_of(&[("Fasting Sugar", 185.0, "mg/dL"), ("Cholesterol", 280.0, "mg/dL")]);
    assert_eq!(score.status, CardioStatus::Insufficient);
    assert_eq!(score.missing, ["age", "blood_pressure_systolic"]);
    assert_eq!(score.score, None);
    assert_eq!(score.level, None);
}

#[test]
fn incomplete_factor_counts_as_missing() {
    let score = score_of(&[
        ("Age", 50.0, "years"),
        ("Systolic BP", 140.0, "mmHg"),
        ("Total Cholesterol", 210.0, "bananas"),
        ("Fasting Sugar", 110.0, "mg/dL"),
    ]);
    assert_eq!(score.status, CardioStatus::Insufficient);
    assert_eq!(score.missing, ["cholesterol_total"]);
}

#[test]
fn complete_inputs_produce_weighted_score() {
    // age 0.552, systolic capped at 1, cholesterol 0.625, sugar 0.610
    let score = score_of(&[
        ("Age", 50.0, "years"),
        ("Systolic BP", 140.0, "mmHg"),
        ("Cholesterol", 210.0, "mg/dL"),
        ("Fasting Sugar", 110.0, "mg/dL"),
    ]);
    assert_eq!(score.status, CardioStatus::Calculated);
    assert_eq!(score.score, Some(72));
    assert_eq!(score.level, Some(CardioLevel::High));
    assert!(score.missing.is_empty());
}

#[test]
fn values_below_midpoint_contribute_nothing() {
    let score = score_of(&[
        ("Age", 25.0, "years"),
        ("Systolic BP", 95.0, "mmHg"),
        ("Cholesterol", 150.0, "mg/dL"),
        ("Fasting Sugar", 80.0, "mg/dL"),
    ]);
    assert_eq!(score.score, Some(0));
    assert_eq!(score.level, Some(CardioLevel::Low));
}

#[test]
fn extreme_values_saturate_at_100() {
    let score = score_of(&[
        ("Age", 70.0, "years"),
        ("Systolic BP", 190.0, "mmHg"),
        ("Cholesterol", 300.0, "mg/dL"),
        ("Fasting Sugar", 350.0, "mg/dL"),
    ]);
    assert_eq!(score.score, Some(100));
}

#[test]
fn mild_elevations_land_in_moderate_band() {
    let score = score_of(&[
        ("Age", 50.0, "years"),
        ("Systolic BP", 118.0, "mmHg"),
        ("Cholesterol", 180.0, "mg/dL"),
        ("Fasting Sugar", 95.0, "mg/dL"),
    ]);
    assert_eq!(score.score, Some(41));
    assert_eq!(score.level, Some(CardioLevel::Moderate));
}

#[test]
fn bare_age_without_unit_still_scores() {
    let score = score_of(&[
        ("Age", 50.0, ""),
        ("Systolic BP", 140.0, "mmHg"),
        ("Cholesterol", 210.0, "mg/dL"),
        ("Fasting Sugar", 110.0, "mg/dL"),
    ]);
    assert_eq!(score.status, CardioStatus::Calculated);
    assert_eq!(score.score, Some(72));
}

#[test]
fn calculated_score_is_deterministic() {
    let table = GuidelineTable::builtin();
    let input = [
        Parameter::new("Age", 58.0, "years"),
        Parameter::new("Systolic BP", 136.0, "mmHg"),
        Parameter::new("Cholesterol", 235.0, "mg/dL"),
        Parameter::new("Fasting Sugar", 118.0, "mg/dL"),
    ];
    let report = categorize(table, &input);
    let first = cardio_score(table, &report);
    assert_eq!(first.status, CardioStatus::Calculated);
    for _ in 0..10 {
        assert_eq!(cardio_score(table, &categorize(table, &input)), first);
    }
}

#[test]
fn two_lipid_red_flags_raise_pattern_alert() {
    let table = GuidelineTable::builtin();
    let one = categorize(table, &[Parameter::new("Cholesterol", 260.0, "mg/dL")]);
    assert_eq!(pattern_alert(&one), None);

    let two = categorize(
        table,
        &[
            Parameter::new("Cholesterol", 260.0, "mg/dL"),
            Parameter::new("Triglycerides", 320.0, "mg/dL"),
        ],
    );
    assert_eq!(pattern_alert(&two).as_deref(), Some(PATTERN_ALERT));
}
