use mitra_core::models::classification::GuidelineSource;

use super::{entry, with_female};
use crate::entry::GuidelineEntry;
use crate::range::{BandSet, Range};

/// Complete blood count. Haemoglobin follows the WHO anaemia grades
/// (mild, moderate, severe); the cell counts and red cell indices use
/// laboratory intervals.
pub fn entries() -> Vec<GuidelineEntry> {
    vec![
        with_female(
            entry(
                "hemoglobin",
                "Hemoglobin",
                &["Haemoglobin", "Hb", "HGB"],
                "g/dL",
                GuidelineSource::Who,
                BandSet::normal(Range::between(13.0, 17.5))
                    .borderline(Range::between(11.0, 13.0))
                    .red_flag(Range::between(8.0, 11.0))
                    .red_flag(Range::at_least(17.5))
                    .critical(Range::below(8.0)),
            ),
            BandSet::normal(Range::between(12.0, 15.5))
                .borderline(Range::between(11.0, 12.0))
                .red_flag(Range::between(8.0, 11.0))
                .red_flag(Range::at_least(15.5))
                .critical(Range::below(8.0)),
        ),
        entry(
            "platelets",
            "Platelet Count",
            &["Platelets", "PLT"],
            "x10³/µL",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(150.0, 450.0))
                .red_flag(Range::between(50.0, 150.0))
                .red_flag(Range::at_least(450.0))
                .critical(Range::below(50.0)),
        ),
        entry(
            "wbc",
            "WBC Count",
            &["WBC", "Total Leucocyte Count", "TLC", "White Blood Cells", "Total WBC Count"],
            "cells/µL",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(4000.0, 11000.0))
                .red_flag(Range::below(4000.0))
                .red_flag(Range::at_least(11000.0)),
        ),
        entry(
            "rbc",
            "RBC Count",
            &["RBC", "Red Blood Cells", "Red Cell Count"],
            "million/µL",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(3.9, 5.7))
                .red_flag(Range::below(3.9))
                .red_flag(Range::at_least(5.7)),
        ),
        entry(
            "hematocrit",
            "Hematocrit (PCV)",
            &["Hematocrit", "Haematocrit", "PCV", "HCT", "Packed Cell Volume"],
            "%",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(40.0, 50.0))
                .red_flag(Range::below(40.0))
                .red_flag(Range::at_least(50.0)),
        ),
        entry(
            "mcv",
            "MCV",
            &["Mean Corpuscular Volume", "Mean Cell Volume"],
            "fL",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(80.0, 100.0))
                .red_flag(Range::below(80.0))
                .red_flag(Range::at_least(100.0)),
        ),
        entry(
            "mch",
            "MCH",
            &["Mean Corpuscular Hemoglobin", "Mean Corpuscular Haemoglobin", "Mean Cell Hemoglobin"],
            "pg",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(27.0, 32.0))
                .red_flag(Range::below(27.0))
                .red_flag(Range::at_least(32.0)),
        ),
        entry(
            "mchc",
            "MCHC",
            &[
                "Mean Corpuscular Hemoglobin Concentration",
                "Mean Corpuscular Haemoglobin Concentration",
                "Mean Cell Hemoglobin Concentration",
            ],
            "g/dL",
            GuidelineSource::ClinicalLaboratory,
            BandSet::normal(Range::between(31.5, 34.5))
                .red_flag(Range::below(31.5))
                .red_flag(Range::at_least(34.5)),
        ),
    ]
}
