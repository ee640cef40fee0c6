use mitra_core::models::classification::GuidelineSource;

use super::{entry, with_female};
use crate::entry::GuidelineEntry;
use crate::range::{BandSet, Range};

/// Kidney function: NKF eGFR stages and laboratory reference intervals.
pub fn entries() -> Vec<GuidelineEntry> {
    vec![
        with_female(
            entry(
                "creatinine",
                "Creatinine",
                &["Serum Creatinine", "Creat"],
                "mg/dL",
                GuidelineSource::ClinicalLaboratory,
                BandSet::normal(Range::between(0.67, 1.17))
                    .borderline(Range::below(0.67))
                    .red_flag(Range::between(1.17, 4.0))
                    .critical(Range::at_least(4.0)),
            ),
            BandSet::normal(Range::between(0.51, 0.95))
                .borderline(Range::below(0.51))
                .red_flag(Range::between(0.95, 4.0))
                .critical(Range::at_least(4.0)),
        ),
        entry(
            "egfr",
            "eGFR",
            &["Estimated GFR", "GFR", "Estimated Glomerular Filtration Rate"],
            "mL/min/1.73m²",
            GuidelineSource::Nkf,
            BandSet::normal(Range::at_least(90.0))
                .borderline(Range::between(60.0, 90.0))
                .red_flag(Range::between(15.0, 60.0))
                .critical(Range::below(15.0)),
        ),
        entry(
            "urea",
            "Blood Urea",
            &["Urea", "Serum Urea"],
            "mg/dL",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(15.0, 45.0))
                .borderline(Range::below(15.0))
                .red_flag(Range::at_least(45.0)),
        ),
        entry(
            "bun",
            "BUN",
            &["Blood Urea Nitrogen", "Urea Nitrogen"],
            "mg/dL",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(6.0, 20.0))
                .borderline(Range::below(6.0))
                .red_flag(Range::at_least(20.0)),
        ),
        with_female(
            entry(
                "uric_acid",
                "Uric Acid",
                &["Serum Uric Acid", "Urate"],
                "mg/dL",
                GuidelineSource::ClinicalLaboratory,
                BandSet::normal(Range::between(3.5, 7.2))
                    .borderline(Range::below(3.5))
                    .red_flag(Range::at_least(7.2)),
            ),
            BandSet::normal(Range::between(2.6, 6.0))
                .borderline(Range::below(2.6))
                .red_flag(Range::at_least(6.0)),
        ),
    ]
}
