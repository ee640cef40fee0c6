use mitra_core::models::classification::Classification;
use mitra_core::models::parameter::Parameter;
use mitra_core::models::patient::Sex;
use mitra_core::models::report::CategorizedReport;
use mitra_guidelines::GuidelineTable;
use tracing::debug;

use crate::classify::classify_for;
use crate::remedies::RemedyList;

pub fn categorize(table: &GuidelineTable, parameters: &[Parameter]) -> CategorizedReport {
    categorize_for(table, parameters, Sex::default())
}

/// Partition `parameters` into severity buckets, keeping input order within
/// each bucket, and attach remedies for the abnormal ones.
pub fn categorize_for(table: &GuidelineTable, parameters: &[Parameter], sex: Sex) -> CategorizedReport {
    let mut report = CategorizedReport::default();
    let mut remedies = RemedyList::default();

    for parameter in parameters {
        match classify_for(table, parameter, sex) {
            Classification::Classified(classified) => {
                if classified.status.is_abnormal() {
                    remedies.add(&classified.key);
                }
                match classified.severity {
                    2 => report.red_flags.push(classified),
                    1 => report.borderline.push(classified),
                    _ => report.normal.push(classified),
                }
            }
            Classification::Incomplete(marker) => report.incomplete.push(marker),
        }
    }

    report.remedies = remedies.finish();
    debug!(
        total = parameters.len(),
        red_flags = report.red_flags.len(),
        borderline = report.borderline.len(),
        incomplete = report.incomplete.len(),
        "categorized report"
    );
    report
}
