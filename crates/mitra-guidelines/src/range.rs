use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A closed-open interval `[min, max)`. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Range {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Range {
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn below(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub const fn unbounded() -> Self {
        Self { min: None, max: None }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value < max)
    }

    /// Like [`Range::contains`] but also admits the upper bound. Used so a
    /// higher-severity band owns a boundary it shares with a lower one.
    pub fn contains_closed(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    /// Midpoint of a bounded range.
    pub fn midpoint(&self) -> Option<f64> {
        Some((self.min? + self.max?) / 2.0)
    }

    fn lower(&self) -> f64 {
        self.min.unwrap_or(f64::NEG_INFINITY)
    }

    fn upper(&self) -> f64 {
        self.max.unwrap_or(f64::INFINITY)
    }

    /// Whether this range lies entirely at or above `other`.
    pub fn is_above(&self, other: &Range) -> bool {
        self.lower() >= other.upper()
    }

    pub fn check(&self) -> Result<(), String> {
        if self.min.is_some_and(|v| !v.is_finite()) || self.max.is_some_and(|v| !v.is_finite()) {
            return Err("bounds must be finite".to_string());
        }
        if self.lower() >= self.upper() {
            return Err(format!("min {} is not below max {}", self.lower(), self.upper()));
        }
        Ok(())
    }

    /// Human-readable form, e.g. `100–126 mg/dL`, `<5.7 %`, `≥240 mg/dL`.
    pub fn describe(&self, unit: &str) -> String {
        let body = match (self.min, self.max) {
            (Some(min), Some(max)) => format!("{}–{}", fmt_bound(min), fmt_bound(max)),
            (None, Some(max)) => format!("<{}", fmt_bound(max)),
            (Some(min), None) => format!("≥{}", fmt_bound(min)),
            (None, None) => return "any value".to_string(),
        };
        if unit.is_empty() {
            body
        } else {
            format!("{body} {unit}")
        }
    }
}

fn fmt_bound(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').to_string()
    }
}

/// Which band of a guideline entry a value fell into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BandKind {
    Normal,
    Borderline,
    RedFlag,
    Critical,
}

impl BandKind {
    /// Highest severity first.
    pub const PRECEDENCE: [BandKind; 4] = [
        BandKind::Critical,
        BandKind::RedFlag,
        BandKind::Borderline,
        BandKind::Normal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BandKind::Normal => "normal",
            BandKind::Borderline => "borderline",
            BandKind::RedFlag => "red flag",
            BandKind::Critical => "critical",
        }
    }
}

/// The severity bands of one guideline entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BandSet {
    pub normal: Range,
    #[serde(default)]
    pub borderline: Vec<Range>,
    #[serde(default)]
    pub red_flag: Vec<Range>,
    #[serde(default)]
    pub critical: Vec<Range>,
}

impl BandSet {
    pub fn normal(range: Range) -> Self {
        Self {
            normal: range,
            borderline: Vec::new(),
            red_flag: Vec::new(),
            critical: Vec::new(),
        }
    }

    pub fn borderline(mut self, range: Range) -> Self {
        self.borderline.push(range);
        self
    }

    pub fn red_flag(mut self, range: Range) -> Self {
        self.red_flag.push(range);
        self
    }

    pub fn critical(mut self, range: Range) -> Self {
        self.critical.push(range);
        self
    }

    pub fn ranges(&self, kind: BandKind) -> &[Range] {
        match kind {
            BandKind::Normal => std::slice::from_ref(&self.normal),
            BandKind::Borderline => &self.borderline,
            BandKind::RedFlag => &self.red_flag,
            BandKind::Critical => &self.critical,
        }
    }

    /// Find the band owning `value`, examining bands from the highest
    /// severity down. A shared boundary therefore goes to the more severe band.
    pub fn locate(&self, value: f64) -> Option<(BandKind, &Range)> {
        BandKind::PRECEDENCE.iter().find_map(|&kind| {
            self.ranges(kind)
                .iter()
                .find(|r| r.contains_closed(value))
                .map(|r| (kind, r))
        })
    }

    /// Lowest flagged boundary strictly above the normal range: where the
    /// upward red-flag territory begins.
    pub fn upper_red_flag_threshold(&self) -> Option<f64> {
        self.red_flag
            .iter()
            .chain(&self.critical)
            .filter(|r| r.is_above(&self.normal))
            .filter_map(|r| r.min)
            .min_by(f64::total_cmp)
    }

    /// Every range must be well formed and together they must cover the
    /// whole real line.
    pub fn check(&self, parameter: &str) -> Result<(), crate::error::GuidelineError> {
        let mut all: Vec<&Range> = BandKind::PRECEDENCE
            .iter()
            .flat_map(|&kind| self.ranges(kind))
            .collect();

        for range in &all {
            range
                .check()
                .map_err(|detail| crate::error::GuidelineError::InvalidRange {
                    parameter: parameter.to_string(),
                    detail,
                })?;
        }

        all.sort_by(|a, b| a.lower().total_cmp(&b.lower()));
        let mut reach = f64::NEG_INFINITY;
        for range in all {
            if range.lower() > reach {
                return Err(crate::error::GuidelineError::CoverageGap {
                    parameter: parameter.to_string(),
                    at: reach,
                });
            }
            reach = reach.max(range.upper());
        }
        if reach < f64::INFINITY {
            return Err(crate::error::GuidelineError::CoverageGap {
                parameter: parameter.to_string(),
                at: reach,
            });
        }
        Ok(())
    }
}
