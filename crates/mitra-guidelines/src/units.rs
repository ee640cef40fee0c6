//! Fixed unit-conversion table. Conversions are linear (`value * scale + offset`);
//! analyte-specific rows are tried before generic ones.

use crate::normalize::normalize_unit;

struct Conversion {
    /// Canonical guideline key, or `None` for a conversion valid for any analyte.
    parameter: Option<&'static str>,
    from: &'static str,
    to: &'static str,
    scale: f64,
    offset: f64,
}

const fn analyte(parameter: &'static str, from: &'static str, to: &'static str, scale: f64) -> Conversion {
    Conversion {
        parameter: Some(parameter),
        from,
        to,
        scale,
        offset: 0.0,
    }
}

const fn generic(from: &'static str, to: &'static str, scale: f64) -> Conversion {
    Conversion {
        parameter: None,
        from,
        to,
        scale,
        offset: 0.0,
    }
}

// `from` and `to` are in normalised spelling.
const CONVERSIONS: &[Conversion] = &[
    analyte("blood_sugar_fasting", "mmol/l", "mg/dl", 18.0),
    Conversion {
        parameter: Some("hba1c"),
        from: "mmol/mol",
        to: "%",
        scale: 0.09148,
        offset: 2.152,
    },
    analyte("cholesterol_total", "mmol/l", "mg/dl", 38.67),
    analyte("ldl", "mmol/l", "mg/dl", 38.67),
    analyte("hdl", "mmol/l", "mg/dl", 38.67),
    analyte("triglycerides", "mmol/l", "mg/dl", 88.57),
    analyte("creatinine", "umol/l", "mg/dl", 1.0 / 88.4),
    analyte("urea", "mmol/l", "mg/dl", 6.006),
    analyte("bun", "mmol/l", "mg/dl", 2.801),
    analyte("uric_acid", "umol/l", "mg/dl", 1.0 / 59.48),
    analyte("total_bilirubin", "umol/l", "mg/dl", 1.0 / 17.1),
    analyte("vitamin_d", "nmol/l", "ng/ml", 1.0 / 2.496),
    analyte("vitamin_b12", "pmol/l", "pg/ml", 1.355),
    generic("g/l", "g/dl", 0.1),
    generic("kpa", "mmhg", 7.50062),
    generic("lakh/ul", "10^3/ul", 100.0),
    generic("/ul", "10^3/ul", 0.001),
    generic("10^3/ul", "/ul", 1000.0),
];

// Reports often give these as a bare number.
const IMPLIED_UNIT: &[&str] = &["age", "bmi"];

/// Convert `value` of `parameter` from `from_unit` to `to_unit`.
/// Returns `None` when no conversion path exists.
///
/// A blank `from_unit` means `to_unit` for parameters that are read without one.
pub fn convert(parameter: &str, value: f64, from_unit: &str, to_unit: &str) -> Option<f64> {
    let from = normalize_unit(from_unit);
    let to = normalize_unit(to_unit);
    if from == to || (from.is_empty() && IMPLIED_UNIT.contains(&parameter)) {
        return Some(value);
    }

    let matches = |c: &&Conversion| c.from == from && c.to == to;
    CONVERSIONS
        .iter()
        .filter(matches)
        .find(|c| c.parameter == Some(parameter))
        .or_else(|| {
            CONVERSIONS
                .iter()
                .filter(matches)
                .find(|c| c.parameter.is_none())
        })
        .map(|c| value * c.scale + c.offset)
}
