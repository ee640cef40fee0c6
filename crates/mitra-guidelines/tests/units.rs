use mitra_guidelines::normalize::normalize_unit;
use mitra_guidelines::units::convert;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn spelling_variants_need_no_conversion() {
    assert_eq!(convert("blood_sugar_fasting", 110.0, "mg/dl", "mg/dL"), Some(110.0));
    assert_eq!(convert("homocysteine", 12.0, "μmol/L", "µmol/L"), Some(12.0));
    assert_eq!(convert("platelets", 220.0, "10^9/L", "x10³/µL"), Some(220.0));
    assert_eq!(convert("age", 50.0, "yrs", "years"), Some(50.0));
}

#[test]
fn unit_normalisation() {
    assert_eq!(normalize_unit(" mL/min/1.73 m² "), "ml/min/1.73m2");
    assert_eq!(normalize_unit("/cumm"), "/ul");
    assert_eq!(normalize_unit("million/mm³"), "million/ul");
    assert_eq!(normalize_unit("µIU/mL"), "miu/l");
}

#[test]
fn glucose_mmol_converts_to_mg() {
    let v = convert("blood_sugar_fasting", 7.0, "mmol/L", "mg/dL").unwrap();
    assert!(close(v, 126.0));
}

#[test]
fn hba1c_ifcc_converts_to_ngsp_percent() {
    let v = convert("hba1c", 48.0, "mmol/mol", "%").unwrap();
    assert!(close(v, 48.0 * 0.09148 + 2.152));
}

#[test]
fn conversion_factors_are_analyte_specific() {
    let chol = convert("cholesterol_total", 5.0, "mmol/L", "mg/dL").unwrap();
    let tg = convert("triglycerides", 5.0, "mmol/L", "mg/dL").unwrap();
    assert!(close(chol, 193.35));
    assert!(close(tg, 442.85));
}

#[test]
fn generic_conversions_apply_to_any_analyte() {
    assert!(close(convert("hemoglobin", 135.0, "g/L", "g/dL").unwrap(), 13.5));
    assert!(close(convert("platelets", 2.5, "lakh/cumm", "x10³/µL").unwrap(), 250.0));
    assert!(close(convert("wbc", 7.2, "x10³/µL", "cells/µL").unwrap(), 7200.0));
}

#[test]
fn no_path_yields_none() {
    assert_eq!(convert("lpa", 50.0, "mg/dL", "nmol/L"), None);
    assert_eq!(convert("ldl", 3.0, "mmol/L", "%"), None);
    assert_eq!(convert("ldl", 3.0, "", "mg/dL"), None);
}

#[test]
fn blank_unit_is_implied_for_age_and_bmi() {
    assert_eq!(convert("age", 50.0, "", "years"), Some(50.0));
    assert_eq!(convert("bmi", 27.5, " ", "kg/m²"), Some(27.5));
    assert_eq!(convert("age", 50.0, "months", "years"), None);
}
