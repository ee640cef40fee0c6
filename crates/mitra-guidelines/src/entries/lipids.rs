use mitra_core::models::classification::GuidelineSource;

use super::{entry, with_female};
use crate::entry::GuidelineEntry;
use crate::range::{BandSet, Range};

/// ACC/AHA lipid thresholds plus the clinical cut-offs for Lp(a) and
/// homocysteine.
pub fn entries() -> Vec<GuidelineEntry> {
    vec![
        entry(
            "cholesterol_total",
            "Total Cholesterol",
            &["Cholesterol", "Serum Cholesterol", "TC", "Cholesterol Total"],
            "mg/dL",
            GuidelineSource::Aha,
            BandSet::normal(Range::between(120.0, 200.0))
                .borderline(Range::below(120.0))
                .borderline(Range::between(200.0, 240.0))
                .red_flag(Range::at_least(240.0)),
        ),
        entry(
            "ldl",
            "LDL Cholesterol",
            &["LDL", "LDL-C", "Low Density Lipoprotein", "LDL Cholesterol Direct"],
            "mg/dL",
            GuidelineSource::Aha,
            BandSet::normal(Range::below(130.0))
                .borderline(Range::between(130.0, 160.0))
                .red_flag(Range::between(160.0, 190.0))
                .critical(Range::at_least(190.0)),
        ),
        with_female(
            entry(
                "hdl",
                "HDL Cholesterol",
                &["HDL", "HDL-C", "High Density Lipoprotein"],
                "mg/dL",
                GuidelineSource::Aha,
                BandSet::normal(Range::at_least(40.0)).red_flag(Range::below(40.0)),
            ),
            BandSet::normal(Range::at_least(50.0)).red_flag(Range::below(50.0)),
        ),
        entry(
            "triglycerides",
            "Triglycerides",
            &["TG", "Triglyceride", "Serum Triglycerides"],
            "mg/dL",
            GuidelineSource::Aha,
            BandSet::normal(Range::below(150.0))
                .borderline(Range::between(150.0, 200.0))
                .red_flag(Range::between(200.0, 500.0))
                .critical(Range::at_least(500.0)),
        ),
        entry(
            "lpa",
            "Lp(a)",
            &["Lipoprotein (a)", "Lipoprotein a"],
            "nmol/L",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::below(72.0))
                .red_flag(Range::between(72.0, 125.0))
                .critical(Range::at_least(125.0)),
        ),
        entry(
            "homocysteine",
            "Homocysteine",
            &["Serum Homocysteine", "Hcy"],
            "µmol/L",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::below(15.0))
                .red_flag(Range::between(15.0, 30.0))
                .critical(Range::at_least(30.0)),
        ),
    ]
}
