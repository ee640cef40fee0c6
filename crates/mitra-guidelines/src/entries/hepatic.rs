use mitra_core::models::classification::GuidelineSource;

use super::entry;
use crate::entry::GuidelineEntry;
use crate::range::{BandSet, Range};

/// Liver function tests: enzymes, bilirubin fractions and serum proteins.
pub fn entries() -> Vec<GuidelineEntry> {
    vec![
        entry(
            "sgpt",
            "SGPT (ALT)",
            &["SGPT", "ALT", "Alanine Aminotransferase"],
            "U/L",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::below(40.0))
                .borderline(Range::between(40.0, 100.0))
                .red_flag(Range::at_least(100.0)),
        ),
        entry(
            "sgot",
            "SGOT (AST)",
            &["SGOT", "AST", "Aspartate Aminotransferase"],
            "U/L",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::below(40.0))
                .borderline(Range::between(40.0, 100.0))
                .red_flag(Range::at_least(100.0)),
        ),
        entry(
            "total_bilirubin",
            "Total Bilirubin",
            &["Bilirubin Total", "Bilirubin", "Serum Bilirubin"],
            "mg/dL",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::below(1.2))
                .borderline(Range::between(1.2, 2.0))
                .red_flag(Range::at_least(2.0)),
        ),
        // Reported to one decimal; 0.3 and 1.1 themselves are within normal.
        entry(
            "direct_bilirubin",
            "Direct Bilirubin",
            &["Bilirubin Direct", "Conjugated Bilirubin", "Bilirubin (Direct)"],
            "mg/dL",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::below(0.31)).red_flag(Range::at_least(0.31)),
        ),
        entry(
            "indirect_bilirubin",
            "Indirect Bilirubin",
            &["Bilirubin Indirect", "Unconjugated Bilirubin", "Bilirubin (Indirect)"],
            "mg/dL",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::below(1.11)).red_flag(Range::at_least(1.11)),
        ),
        entry(
            "total_protein",
            "Total Protein",
            &["Protein Total", "Serum Total Protein", "Total Proteins"],
            "g/dL",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(6.0, 8.0))
                .red_flag(Range::below(6.0))
                .red_flag(Range::at_least(8.0)),
        ),
        entry(
            "globulin",
            "Globulin",
            &["Serum Globulin"],
            "g/dL",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(2.3, 3.5))
                .red_flag(Range::below(2.3))
                .red_flag(Range::at_least(3.5)),
        ),
        entry(
            "albumin",
            "Albumin",
            &["Serum Albumin"],
            "g/dL",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(3.5, 5.5))
                .borderline(Range::at_least(5.5))
                .red_flag(Range::below(3.5)),
        ),
        entry(
            "alp",
            "ALP",
            &["Alkaline Phosphatase"],
            "U/L",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(40.0, 130.0))
                .borderline(Range::below(40.0))
                .red_flag(Range::at_least(130.0)),
        ),
    ]
}
