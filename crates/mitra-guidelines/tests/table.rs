use mitra_core::models::classification::GuidelineSource;
use mitra_core::models::patient::Sex;
use mitra_guidelines::GuidelineTable;
use mitra_guidelines::error::GuidelineError;
use mitra_guidelines::loader::FORMAT_VERSION;
use mitra_guidelines::normalize::normalize_name;
use mitra_guidelines::range::{BandKind, BandSet, Range};

#[test]
fn builtin_table_is_valid() {
    let table = GuidelineTable::builtin();
    table.validate().unwrap();
    assert_eq!(table.version(), mitra_guidelines::BUILTIN_VERSION);
    assert!(table.entries().len() >= 25);
}

#[test]
fn lookup_normalises_case_punctuation_and_specimen_suffix() {
    let table = GuidelineTable::builtin();
    for name in ["Fasting Sugar", "FASTING BLOOD SUGAR", "glucose (fasting)", "Glucose, Serum"] {
        let entry = table.lookup(name).unwrap_or_else(|| panic!("no entry for {name}"));
        assert_eq!(entry.parameter, "blood_sugar_fasting");
    }
    assert_eq!(table.lookup("Lipoprotein (a), Serum").unwrap().parameter, "lpa");
    assert_eq!(table.lookup("Cholesterol").unwrap().parameter, "cholesterol_total");
    assert_eq!(table.lookup("blood_pressure_systolic").unwrap().source, GuidelineSource::Aha);
    assert!(table.lookup("Serum Unobtainium").is_none());
}

#[test]
fn normalize_name_keeps_only_alphanumerics() {
    assert_eq!(normalize_name("Lp(a)"), "lpa");
    assert_eq!(normalize_name("SGPT (ALT), Serum"), "sgptalt");
    assert_eq!(normalize_name("HbA1c, EDTA Plasma"), "hba1c");
}

#[test]
fn female_bands_replace_defaults_when_present() {
    let hdl = GuidelineTable::builtin().get("hdl").unwrap();
    assert_eq!(hdl.bands_for(Sex::Male).normal, Range::at_least(40.0));
    assert_eq!(hdl.bands_for(Sex::Female).normal, Range::at_least(50.0));
    assert_eq!(hdl.bands_for(Sex::Other).normal, Range::at_least(40.0));

    let glucose = GuidelineTable::builtin().get("blood_sugar_fasting").unwrap();
    assert_eq!(glucose.bands_for(Sex::Female), &glucose.bands);
}

#[test]
fn shared_boundary_goes_to_the_more_severe_band() {
    let glucose = GuidelineTable::builtin().get("blood_sugar_fasting").unwrap();
    let kind = |v| glucose.bands.locate(v).map(|(k, _)| k);

    assert_eq!(kind(99.9), Some(BandKind::Normal));
    assert_eq!(kind(100.0), Some(BandKind::Borderline));
    assert_eq!(kind(125.9), Some(BandKind::Borderline));
    assert_eq!(kind(126.0), Some(BandKind::RedFlag));
    assert_eq!(kind(300.0), Some(BandKind::Critical));
    assert_eq!(kind(54.0), Some(BandKind::RedFlag));
    assert_eq!(kind(60.0), Some(BandKind::Borderline));
}

#[test]
fn upper_red_flag_threshold_ignores_low_side_bands() {
    let table = GuidelineTable::builtin();
    let sbp = table.get("blood_pressure_systolic").unwrap();
    assert_eq!(sbp.bands.upper_red_flag_threshold(), Some(130.0));
    let glucose = table.get("blood_sugar_fasting").unwrap();
    assert_eq!(glucose.bands.upper_red_flag_threshold(), Some(126.0));
}

#[test]
fn range_description() {
    assert_eq!(Range::between(100.0, 126.0).describe("mg/dL"), "100–126 mg/dL");
    assert_eq!(Range::below(5.7).describe("%"), "<5.7 %");
    assert_eq!(Range::at_least(240.0).describe("mg/dL"), "≥240 mg/dL");
    assert_eq!(Range::between(0.67, 1.17).describe(""), "0.67–1.17");
    assert_eq!(Range::unbounded().describe("years"), "any value");
}

#[test]
fn coverage_gap_is_rejected() {
    let bands = BandSet::normal(Range::between(10.0, 20.0))
        .red_flag(Range::below(10.0))
        .red_flag(Range::at_least(25.0));
    let err = bands.check("gappy").unwrap_err();
    assert!(matches!(err, GuidelineError::CoverageGap { at, .. } if at == 20.0));

    let open_top = BandSet::normal(Range::at_least(0.0)).red_flag(Range::between(-5.0, 0.0));
    assert!(matches!(open_top.check("x"), Err(GuidelineError::CoverageGap { .. })));
}

#[test]
fn inverted_range_is_rejected() {
    let bands = BandSet::normal(Range::between(20.0, 10.0))
        .red_flag(Range::below(20.0))
        .red_flag(Range::at_least(10.0));
    assert!(matches!(bands.check("x"), Err(GuidelineError::InvalidRange { .. })));
}

#[test]
fn document_loads_back_into_an_equivalent_table() {
    let builtin = GuidelineTable::builtin();
    let json = serde_json::to_string(&builtin.to_document()).unwrap();
    let loaded = GuidelineTable::from_json(&json).unwrap();
    assert_eq!(loaded.version(), builtin.version());
    assert_eq!(loaded.effective_date(), builtin.effective_date());
    let keys = |t: &GuidelineTable| t.entries().iter().map(|e| e.parameter.clone()).collect::<Vec<_>>();
    assert_eq!(keys(&loaded), keys(builtin));
    assert_eq!(loaded.lookup("FBS").unwrap().parameter, "blood_sugar_fasting");
}

#[test]
fn newer_format_is_rejected() {
    let json = format!(
        r#"{{"format_version": {}, "version": "x", "effective_date": "2026-01-01", "entries": []}}"#,
        FORMAT_VERSION + 1
    );
    assert!(matches!(
        GuidelineTable::from_json(&json),
        Err(GuidelineError::UnsupportedFormat { .. })
    ));
}

#[test]
fn duplicate_alias_across_entries_is_rejected() {
    let json = r#"{
        "format_version": 1,
        "version": "test",
        "effective_date": "2026-03-01",
        "entries": [
            {"parameter": "a", "display_name": "Alpha", "aliases": ["Shared"], "unit": "mg/dL",
             "normal": {"min": null, "max": null}, "source": "WHO"},
            {"parameter": "b", "display_name": "Beta", "aliases": ["shared"], "unit": "mg/dL",
             "normal": {"min": null, "max": null}, "source": "WHO"}
        ]
    }"#;
    assert!(matches!(
        GuidelineTable::from_json(json),
        Err(GuidelineError::DuplicateName { .. })
    ));
}

#[test]
fn override_table_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("guidelines.json");
    let json = r#"{
        "version": "clinic-2026.2",
        "effective_date": "2026-02-01",
        "entries": [
            {"parameter": "ferritin", "display_name": "Ferritin", "unit": "ng/mL",
             "normal": {"min": 30, "max": 400},
             "red_flag": [{"min": null, "max": 30}],
             "borderline": [{"min": 400, "max": null}],
             "source": "Clinical Laboratory"}
        ]
    }"#;
    std::fs::write(&path, json).unwrap();

    let table = GuidelineTable::load(&path).unwrap();
    assert_eq!(table.version(), "clinic-2026.2");
    assert_eq!(table.lookup("Serum Ferritin").map(|e| e.parameter.as_str()), None);
    assert_eq!(table.lookup("ferritin").unwrap().display_name, "Ferritin");
}

#[test]
fn missing_file_reports_the_path() {
    let err = GuidelineTable::load(std::path::Path::new("/nonexistent/guidelines.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/guidelines.json"));
}
