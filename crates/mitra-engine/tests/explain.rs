use mitra_core::models::parameter::Parameter;
use mitra_core::models::patient::Language;
use mitra_engine::{cardio_score, categorize, explain};
use mitra_guidelines::GuidelineTable;

fn render(list: &[(&str, f64, &str)], language: Language) -> String {
    let table = GuidelineTable::builtin();
    let input: Vec<Parameter> = list.iter().map(|(n, v, u)| Parameter::new(*n, *v, *u)).collect();
    let report = categorize(table, &input);
    let cardio = cardio_score(table, &report);
    explain(&report, &cardio, language)
}

#[test]
fn english_explanation_names_each_abnormal_parameter() {
    let text = render(
        &[("Fasting Sugar", 185.0, "mg/dL"), ("Cholesterol", 280.0, "mg/dL")],
        Language::En,
    );
    assert!(text.starts_with("Your report shows 2 red-flag and 0 borderline parameters."));
    assert!(text.contains("Fasting Sugar is 185 mg/dL (high; ADA red flag: 126–300 mg/dL)."));
    assert!(text.contains("Cholesterol is 280 mg/dL (high; AHA red flag: ≥240 mg/dL)."));
    assert!(text.contains("prediabetes or diabetes"));
    assert!(text.ends_with("Please discuss these results with your doctor."));
}

#[test]
fn insufficient_cardio_names_missing_values_instead_of_a_number() {
    let text = render(&[("Fasting Sugar", 185.0, "mg/dL")], Language::En);
    assert!(text.contains(
        "could not be calculated because these values are missing: Age, Systolic blood pressure, Total cholesterol."
    ));
    assert!(!text.contains("/100"));
}

#[test]
fn calculated_cardio_is_reported_with_level() {
    let text = render(
        &[
            ("Age", 50.0, "years"),
            ("Systolic BP", 140.0, "mmHg"),
            ("Cholesterol", 210.0, "mg/dL"),
            ("Fasting Sugar", 110.0, "mg/dL"),
        ],
        Language::En,
    );
    assert!(text.contains("Estimated cardiovascular risk score: 72/100 (high risk)."));
}

#[test]
fn hindi_explanation_uses_localised_terms() {
    let text = render(
        &[("Hemoglobin", 9.5, "g/dL"), ("LDL", 140.0, "mg/dL")],
        Language::Hi,
    );
    assert!(text.starts_with("आपकी रिपोर्ट में 1 रेड-फ्लैग और 1 सीमांत पैरामीटर हैं।"));
    assert!(text.contains("हीमोग्लोबिन: 9.5 g/dL (कम;"));
    assert!(text.contains("एलडीएल कोलेस्ट्रॉल: 140 mg/dL (सीमांत;"));
    assert!(text.contains("आयु"));
    assert!(text.ends_with("कृपया इन परिणामों पर अपने डॉक्टर से चर्चा करें।"));
}

#[test]
fn all_normal_and_incomplete_inputs() {
    let text = render(
        &[("Hemoglobin", 14.2, "g/dL"), ("Unobtainium", 2.0, "mg/dL")],
        Language::En,
    );
    assert!(text.starts_with("All 1 recognised parameters are within guideline ranges."));
    assert!(text.contains("These parameters could not be interpreted: Unobtainium."));

    let empty = render(&[], Language::En);
    assert!(empty.starts_with("No parameters were provided for interpretation."));
}

#[test]
fn explanation_is_deterministic() {
    let list = [("TSH", 7.2, "mIU/L"), ("Vitamin D", 12.0, "ng/mL")];
    for language in Language::ALL {
        assert_eq!(render(&list, language), render(&list, language));
    }
}
