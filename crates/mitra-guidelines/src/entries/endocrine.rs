use mitra_core::models::classification::GuidelineSource;

use super::entry;
use crate::entry::GuidelineEntry;
use crate::range::{BandSet, Range};

/// Thyroid and vitamin status. Vitamin D uses the Endocrine Society cut-offs
/// (deficient <20, insufficient 20–29, toxicity risk ≥150 ng/mL).
pub fn entries() -> Vec<GuidelineEntry> {
    vec![
        entry(
            "tsh",
            "TSH",
            &["Thyroid Stimulating Hormone", "TSH Ultrasensitive"],
            "mIU/L",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(0.4, 4.5))
                .borderline(Range::between(4.5, 10.0))
                .red_flag(Range::below(0.4))
                .red_flag(Range::at_least(10.0)),
        ),
        entry(
            "vitamin_d",
            "Vitamin D",
            &[
                "25-OH Vitamin D",
                "25 Hydroxy Vitamin D",
                "Vitamin D3",
                "Vitamin D Total",
                "25(OH)D",
            ],
            "ng/mL",
            GuidelineSource::EndocrineSociety,
            BandSet::normal(Range::between(30.0, 100.0))
                .borderline(Range::between(20.0, 30.0))
                .borderline(Range::between(100.0, 150.0))
                .red_flag(Range::between(10.0, 20.0))
                .red_flag(Range::at_least(150.0))
                .critical(Range::below(10.0)),
        ),
        entry(
            "vitamin_b12",
            "Vitamin B12",
            &["B12", "Cobalamin", "Cyanocobalamin"],
            "pg/mL",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(197.0, 771.0))
                .borderline(Range::at_least(771.0))
                .red_flag(Range::below(197.0)),
        ),
    ]
}
