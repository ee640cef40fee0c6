use mitra_core::models::classification::{Classification, Direction, IncompleteReason, Status};
use mitra_core::models::parameter::Parameter;
use mitra_core::models::patient::Sex;
use mitra_engine::{classify, classify_for};
use mitra_guidelines::GuidelineTable;

fn classified(name: &str, value: f64, unit: &str) -> mitra_core::models::classification::ClassifiedParameter {
    match classify(GuidelineTable::builtin(), &Parameter::new(name, value, unit)) {
        Classification::Classified(p) => p,
        Classification::Incomplete(m) => panic!("{name} was incomplete: {:?}", m.reason),
    }
}

fn reason(name: &str, value: f64, unit: &str) -> IncompleteReason {
    match classify(GuidelineTable::builtin(), &Parameter::new(name, value, unit)) {
        Classification::Incomplete(m) => m.reason,
        Classification::Classified(p) => panic!("{name} classified as {:?}", p.status),
    }
}

#[test]
fn fasting_sugar_at_diabetes_threshold_is_red_flag() {
    let p = classified("Fasting Sugar", 126.0, "mg/dL");
    assert_eq!(p.status, Status::High);
    assert_eq!(p.severity, 2);
    assert_eq!(p.key, "blood_sugar_fasting");
    assert_eq!(p.guideline_reference, "ADA red flag: 126–300 mg/dL");
}

#[test]
fn value_just_below_threshold_stays_borderline() {
    let p = classified("FBS", 125.9, "mg/dL");
    assert_eq!(p.status, Status::Borderline);
    assert_eq!(p.direction, Direction::Above);
}

#[test]
fn normal_value_keeps_input_name_and_unit() {
    let p = classified("Glucose (Fasting)", 92.0, "mg/dl");
    assert_eq!(p.status, Status::Normal);
    assert_eq!(p.direction, Direction::Within);
    assert_eq!(p.parameter, "Glucose (Fasting)");
    assert_eq!(p.unit, "mg/dl");
    assert!(p.converted.is_none());
}

#[test]
fn band_below_normal_reports_low() {
    let p = classified("Haemoglobin", 9.5, "g/dL");
    assert_eq!(p.status, Status::Low);
    assert_eq!(p.direction, Direction::Below);
    assert_eq!(p.classification_used.as_str(), "WHO");
}

#[test]
fn critical_band_wins_over_red_flag_boundary() {
    let p = classified("Systolic BP", 180.0, "mmHg");
    assert_eq!(p.status, Status::Critical);
    assert_eq!(p.severity, 2);
}

#[test]
fn converted_units_are_classified_in_guideline_unit() {
    let p = classified("Fasting Glucose", 7.0, "mmol/L");
    assert_eq!(p.status, Status::High);
    let converted = p.converted.as_ref().unwrap();
    assert_eq!(converted.unit, "mg/dL");
    assert!((converted.value - 126.0).abs() < 1e-9);
    assert_eq!(p.value, 7.0);
}

#[test]
fn female_bands_apply_only_for_female_patients() {
    let table = GuidelineTable::builtin();
    let hb = Parameter::new("Hemoglobin", 12.5, "g/dL");

    let Classification::Classified(male) = classify_for(table, &hb, Sex::Male) else {
        panic!("expected classification");
    };
    let Classification::Classified(female) = classify_for(table, &hb, Sex::Female) else {
        panic!("expected classification");
    };
    assert_eq!(male.status, Status::Borderline);
    assert_eq!(female.status, Status::Normal);
}

#[test]
fn unknown_names_and_units_are_incomplete() {
    assert_eq!(reason("Serum Unobtainium", 3.0, "mg/dL"), IncompleteReason::UnknownParameter);
    assert_eq!(reason("Fasting Sugar", 110.0, "furlongs"), IncompleteReason::UnitMismatch);
}

#[test]
fn name_normalisation_ignores_case_and_lab_suffixes() {
    let p = classified("CREATININE, SERUM", 1.0, "mg/dL");
    assert_eq!(p.key, "creatinine");
    assert_eq!(p.status, Status::Normal);
}

#[test]
fn red_cell_indices_are_classified() {
    let pcv = classified("PCV", 36.0, "%");
    assert_eq!(pcv.key, "hematocrit");
    assert_eq!(pcv.status, Status::Low);

    assert_eq!(classified("MCV", 72.0, "fL").status, Status::Low);
    assert_eq!(classified("Mean Corpuscular Volume", 88.0, "fL").status, Status::Normal);
    assert_eq!(classified("MCH", 33.0, "pg").status, Status::High);
    assert_eq!(classified("MCHC", 33.0, "g/dL").status, Status::Normal);
    assert_eq!(classified("MCHC", 30.0, "g/dL").classification_used.as_str(), "Clinical Laboratory");
}

#[test]
fn bilirubin_fractions_and_serum_proteins_are_classified() {
    let direct = classified("Direct Bilirubin", 0.3, "mg/dL");
    assert_eq!(direct.key, "direct_bilirubin");
    assert_eq!(direct.status, Status::Normal);
    assert_eq!(classified("Bilirubin Direct", 0.6, "mg/dL").status, Status::High);

    assert_eq!(classified("Indirect Bilirubin", 1.1, "mg/dL").status, Status::Normal);
    assert_eq!(classified("Indirect Bilirubin", 1.5, "mg/dL").status, Status::High);

    assert_eq!(classified("Total Protein", 7.2, "g/dL").status, Status::Normal);
    assert_eq!(classified("Total Protein", 5.4, "g/dL").status, Status::Low);
    assert_eq!(classified("Globulin", 4.1, "g/dL").status, Status::High);
}

#[test]
fn age_is_never_flagged() {
    for years in [17.0, 30.0, 70.0, 95.0] {
        let p = classified("Age", years, "years");
        assert_eq!(p.status, Status::Normal, "age {years}");
        assert_eq!(p.severity, 0);
    }
}
