/// Suffixes lab printouts append to analyte names.
const NAME_SUFFIXES: &[&str] = &[", serum", " serum", ", edta plasma", " edta plasma", "/"];

/// Normalise a parameter name for lookup: lowercase, strip specimen
/// suffixes, then keep only alphanumerics. `"Lp(a), Serum"` becomes `"lpa"`.
pub fn normalize_name(name: &str) -> String {
    let mut s = name.to_lowercase();
    for suffix in NAME_SUFFIXES {
        s = s.replace(suffix, "");
    }
    s.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Spellings that denote the same unit, keyed by their normalised form.
const UNIT_ALIASES: &[(&str, &str)] = &[
    ("year", "years"),
    ("yrs", "years"),
    ("yr", "years"),
    ("y", "years"),
    ("beats/min", "bpm"),
    ("/min", "bpm"),
    ("kg/m^2", "kg/m2"),
    ("cells/ul", "/ul"),
    ("x10^3/ul", "10^3/ul"),
    ("x103/ul", "10^3/ul"),
    ("10^9/l", "10^3/ul"),
    ("x10^9/l", "10^3/ul"),
    ("thou/ul", "10^3/ul"),
    ("k/ul", "10^3/ul"),
    ("lakhs/ul", "lakh/ul"),
    ("x10^6/ul", "million/ul"),
    ("10^6/ul", "million/ul"),
    ("mill/ul", "million/ul"),
    ("10^12/l", "million/ul"),
    ("uiu/ml", "miu/l"),
    ("ml/min", "ml/min/1.73m2"),
    ("iu/l", "u/l"),
];

/// Normalise a unit spelling: case, whitespace, micro-sign variants,
/// superscripts, and per-cubic-millimetre written as per-microlitre.
pub fn normalize_unit(unit: &str) -> String {
    let mut s: String = unit
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            '\u{00b5}' | '\u{03bc}' => 'u',
            '\u{00b3}' => '3',
            '\u{00b2}' => '2',
            other => other,
        })
        .collect();
    s = s.replace("cumm", "ul").replace("mm3", "ul");
    UNIT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == s)
        .map_or(s, |(_, canonical)| canonical.to_string())
}
