use mitra_core::models::alert::AlertSeverity;
use mitra_core::models::vitals::{RiskLevel, VitalField, VitalFlag, VitalsInput};
use mitra_engine::error::EngineError;
use mitra_engine::vitals::{Condition, MAX_RISK};
use mitra_engine::{VitalsRiskModel, check_vitals_emergency, predict_vitals_risk};

fn vitals(json: &str) -> VitalsInput {
    serde_json::from_str(json).unwrap()
}

#[test]
fn documented_scenario() {
    let input = vitals(
        r#"{"age":50,"gender":"male","bmi":28,"blood_sugar_fasting":110,
            "blood_pressure_systolic":140,"cholesterol_total":210,"smoking":true,
            "family_history_diabetes":true,"family_history_heart":false,
            "heart_rate":75,"exercise_minutes_weekly":30}"#,
    );
    let result = predict_vitals_risk(&input);

    assert_eq!(result.diabetes_risk, 80);
    assert_eq!(result.diabetes_level, RiskLevel::High);
    assert_eq!(result.heart_risk, 76);
    assert_eq!(result.heart_level, RiskLevel::High);
    assert_eq!(
        result.triggered_rules,
        [
            "age_over_45",
            "bmi_over_25",
            "fasting_sugar_over_100",
            "systolic_over_130",
            "cholesterol_over_200",
            "smoking",
            "family_history_diabetes",
        ]
    );
}

#[test]
fn prediction_is_deterministic() {
    let input = vitals(
        r#"{"age":61,"gender":"female","height":158,"weight":71,"blood_sugar_fasting":104,
            "blood_pressure_systolic":134,"cholesterol_total":226,"family_history_heart":true}"#,
    );
    let first = predict_vitals_risk(&input);
    for _ in 0..10 {
        assert_eq!(predict_vitals_risk(&input), first);
    }
}

#[test]
fn baseline_only_for_healthy_young_adult() {
    let result = predict_vitals_risk(&vitals(r#"{"age":28,"gender":"female"}"#));
    assert_eq!(result.diabetes_risk, 15);
    assert_eq!(result.heart_risk, 12);
    assert_eq!(result.diabetes_level, RiskLevel::Low);
    assert!(result.triggered_rules.is_empty());
    assert_eq!(result.recommendations.len(), 5);
}

#[test]
fn zeros_from_the_form_do_not_fire_rules() {
    let result = predict_vitals_risk(&vitals(
        r#"{"age":30,"gender":"male","bmi":0,"blood_sugar_fasting":0,"cholesterol_total":0}"#,
    ));
    assert!(result.triggered_rules.is_empty());
}

#[test]
fn thresholds_are_strict() {
    let result = predict_vitals_risk(&vitals(
        r#"{"age":45,"gender":"male","bmi":25,"blood_sugar_fasting":100,"blood_pressure_systolic":130}"#,
    ));
    assert!(result.triggered_rules.is_empty());
}

#[test]
fn bmi_derived_from_height_and_weight_fires_rule() {
    let result = predict_vitals_risk(&vitals(r#"{"age":30,"gender":"male","height":170,"weight":85}"#));
    assert_eq!(result.triggered_rules, ["bmi_over_25"]);
    assert_eq!(result.diabetes_risk, 27);
    assert_eq!(result.heart_risk, 22);
}

#[test]
fn totals_are_clamped() {
    let mut model = VitalsRiskModel::default();
    for rule in &mut model.rules {
        rule.diabetes_weight = 40;
        rule.heart_weight = 40;
    }
    let result = model.evaluate(&vitals(
        r#"{"age":70,"gender":"male","bmi":35,"blood_sugar_fasting":200,"blood_pressure_systolic":170,
            "cholesterol_total":280,"smoking":true,"family_history_diabetes":true,"family_history_heart":true}"#,
    ));
    assert_eq!(result.diabetes_risk, MAX_RISK);
    assert_eq!(result.heart_risk, MAX_RISK);
    assert_eq!(result.triggered_rules.len(), model.rules.len());
}

#[test]
fn model_loads_from_json() {
    let model = VitalsRiskModel::from_json(
        r#"{
            "diabetes_baseline": 10,
            "heart_baseline": 10,
            "rules": [
                {"id": "sugar", "condition": {"kind": "above", "field": "blood_sugar_fasting", "threshold": 126}, "diabetes_weight": 50},
                {"id": "smoker", "condition": {"kind": "flag", "flag": "smoking"}, "heart_weight": 30}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(model.cap, MAX_RISK);

    let result = model.evaluate(&vitals(
        r#"{"age":40,"gender":"other","blood_sugar_fasting":140,"smoking":true}"#,
    ));
    assert_eq!(result.diabetes_risk, 60);
    assert_eq!(result.diabetes_level, RiskLevel::High);
    assert_eq!(result.heart_risk, 40);
    assert_eq!(result.heart_level, RiskLevel::Moderate);
    assert!(result.recommendations.is_empty());
}

#[test]
fn model_validation() {
    let duplicate = r#"{"diabetes_baseline":0,"heart_baseline":0,"rules":[
        {"id":"a","condition":{"kind":"flag","flag":"smoking"}},
        {"id":"a","condition":{"kind":"flag","flag":"smoking"}}]}"#;
    assert!(matches!(
        VitalsRiskModel::from_json(duplicate),
        Err(EngineError::InvalidModel(_))
    ));

    let cap = r#"{"diabetes_baseline":0,"heart_baseline":0,"cap":120,"rules":[]}"#;
    assert!(matches!(VitalsRiskModel::from_json(cap), Err(EngineError::InvalidModel(_))));

    assert!(matches!(VitalsRiskModel::from_json("{"), Err(EngineError::Parse(_))));
}

#[test]
fn standard_model_round_trips_through_json() {
    let json = serde_json::to_string(VitalsRiskModel::standard()).unwrap();
    let reloaded = VitalsRiskModel::from_json(&json).unwrap();
    assert_eq!(&reloaded, VitalsRiskModel::standard());
}

#[test]
fn conditions_are_tagged_by_kind_on_the_wire() {
    let above = Condition::Above {
        field: VitalField::Age,
        threshold: 45.0,
    };
    assert_eq!(
        serde_json::to_value(&above).unwrap(),
        serde_json::json!({"kind": "above", "field": "age", "threshold": 45.0})
    );
    let flag = Condition::Flag {
        flag: VitalFlag::Smoking,
    };
    assert_eq!(
        serde_json::to_value(&flag).unwrap(),
        serde_json::json!({"kind": "flag", "flag": "smoking"})
    );
}

#[test]
fn vitals_emergency_thresholds() {
    let calm = check_vitals_emergency(&vitals(
        r#"{"age":50,"gender":"male","blood_pressure_systolic":180,"blood_sugar_fasting":400,"heart_rate":40}"#,
    ));
    assert!(!calm.is_emergency);
    assert_eq!(calm.severity, AlertSeverity::Normal);
    assert_eq!(calm.total_alerts, 0);

    let crisis = check_vitals_emergency(&vitals(
        r#"{"age":50,"gender":"male","blood_pressure_systolic":190,"heart_rate":38}"#,
    ));
    assert!(crisis.is_emergency);
    assert_eq!(crisis.severity, AlertSeverity::Critical);
    assert_eq!(crisis.total_alerts, 2);
    assert_eq!(crisis.alerts[0].parameter, "blood_pressure_systolic");
    assert!(crisis.alerts[0].message_en.contains("190 mmHg"));
    assert!(crisis.alerts[1].message_hi.contains("38 bpm"));
}
