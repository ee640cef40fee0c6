//! Lifestyle remedies for abnormal parameters.

const GLYCEMIC: &[&str] = &[
    "Reduce intake of refined sugars and processed carbohydrates.",
    "Prioritize high-fiber foods like whole grains, vegetables, and legumes.",
    "Engage in at least 30 minutes of brisk walking daily.",
];

const LIPID: &[&str] = &[
    "Limit saturated and trans fats (e.g., deep-fried foods, butter).",
    "Increase intake of heart-healthy fats (omega-3) found in flaxseeds or walnuts.",
    "Incorporate aerobic exercise (cycling, swimming) 5 times a week.",
];

const BLOOD_PRESSURE: &[&str] = &[
    "Keep daily salt intake under 5 grams and avoid packaged snacks.",
    "Check your blood pressure at home at the same time each day.",
];

const HEART_RATE: &[&str] = &["Practice slow deep breathing or meditation for 10 minutes daily."];

const WEIGHT: &[&str] = &["Aim for a healthy BMI (18.5-24.9) through portion control and regular activity."];

const RENAL: &[&str] = &[
    "Maintain adequate hydration (2-3 liters of water daily).",
    "Monitor daily salt intake and avoid excessive protein consumption.",
    "Avoid over-the-counter painkillers (NSAIDs) without clinical advice.",
];

const URIC_ACID: &[&str] = &[
    "Limit intake of purine-rich foods like red meat and certain seafood.",
    "Stay well-hydrated to help kidneys flush out uric acid.",
];

const HEMATOLOGY: &[&str] = &[
    "Increase intake of iron-rich foods like spinach, lentils, and pomegranate.",
    "Consume Vitamin C rich foods (citrus fruits) to enhance iron absorption.",
];

const HEPATIC: &[&str] = &[
    "Avoid alcohol consumption and limit highly processed/oily foods.",
    "Incorporate liver-friendly foods like green leafy vegetables and turmeric.",
];

const VITAMIN_D: &[&str] = &[
    "Increase safe sunlight exposure (15-20 minutes daily in mid-morning).",
    "Consume Vitamin D rich foods like fatty fish or fortified cereals.",
];

const VITAMIN_B12: &[&str] = &["Include B12 sources such as dairy, eggs, or fortified foods in your diet."];

const HOMOCYSTEINE: &[&str] = &["Eat folate-rich foods like leafy greens, beans, and citrus fruits."];

const THYROID: &[&str] = &["Take thyroid medication only as prescribed and recheck TSH in 6-8 weeks."];

/// Appended once when any parameter is abnormal.
pub const UNIVERSAL: &[&str] = &[
    "Discuss these results with your primary care physician for a formal diagnosis.",
    "Ensure 7-8 hours of quality sleep for metabolic recovery.",
];

/// Remedies for one canonical parameter key. Empty for keys with none.
pub fn remedies_for(key: &str) -> &'static [&'static str] {
    match key {
        "blood_sugar_fasting" | "hba1c" => GLYCEMIC,
        "cholesterol_total" | "ldl" | "hdl" | "triglycerides" | "lpa" => LIPID,
        "blood_pressure_systolic" | "blood_pressure_diastolic" => BLOOD_PRESSURE,
        "heart_rate" => HEART_RATE,
        "bmi" => WEIGHT,
        "creatinine" | "egfr" | "urea" | "bun" => RENAL,
        "uric_acid" => URIC_ACID,
        "hemoglobin" | "rbc" | "hematocrit" | "mcv" | "mch" | "mchc" => HEMATOLOGY,
        "sgpt" | "sgot" | "total_bilirubin" | "direct_bilirubin" | "indirect_bilirubin" | "albumin"
        | "total_protein" | "globulin" | "alp" => HEPATIC,
        "vitamin_d" => VITAMIN_D,
        "vitamin_b12" => VITAMIN_B12,
        "homocysteine" => HOMOCYSTEINE,
        "tsh" => THYROID,
        _ => &[],
    }
}

/// Collects remedies in first-seen order without duplicates.
#[derive(Debug, Default)]
pub(crate) struct RemedyList {
    items: Vec<String>,
    any_abnormal: bool,
}

impl RemedyList {
    pub(crate) fn add(&mut self, key: &str) {
        self.any_abnormal = true;
        for remedy in remedies_for(key) {
            self.push(remedy);
        }
    }

    fn push(&mut self, remedy: &str) {
        if !self.items.iter().any(|r| r == remedy) {
            self.items.push(remedy.to_string());
        }
    }

    pub(crate) fn finish(mut self) -> Vec<String> {
        if self.any_abnormal {
            for remedy in UNIVERSAL {
                self.push(remedy);
            }
        }
        self.items
    }
}
