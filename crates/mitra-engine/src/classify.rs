use mitra_core::models::classification::{
    Classification, ClassifiedParameter, Direction, IncompleteMarker, IncompleteReason, Status,
};
use mitra_core::models::parameter::{Measurement, Parameter};
use mitra_core::models::patient::Sex;
use mitra_guidelines::GuidelineTable;
use mitra_guidelines::normalize::normalize_unit;
use mitra_guidelines::range::BandKind;
use mitra_guidelines::units;
use tracing::debug;

/// Classify one parameter using the default (non sex-specific) bands.
pub fn classify(table: &GuidelineTable, parameter: &Parameter) -> Classification {
    classify_for(table, parameter, Sex::default())
}

/// Classify one parameter, selecting female bands where the entry has them.
///
/// Total: every input maps to a classified parameter or an incomplete marker.
pub fn classify_for(table: &GuidelineTable, parameter: &Parameter, sex: Sex) -> Classification {
    let Some(entry) = table.lookup(&parameter.name) else {
        debug!(parameter = %parameter.name, "no guideline entry");
        return incomplete(parameter, IncompleteReason::UnknownParameter);
    };

    let Some(value) = units::convert(&entry.parameter, parameter.value, &parameter.unit, &entry.unit)
    else {
        debug!(
            parameter = %parameter.name,
            unit = %parameter.unit,
            expected = %entry.unit,
            "no unit conversion path"
        );
        return incomplete(parameter, IncompleteReason::UnitMismatch);
    };

    let bands = entry.bands_for(sex);
    let Some((kind, range)) = bands.locate(value) else {
        return incomplete(parameter, IncompleteReason::OutOfCoverage);
    };

    let direction = match kind {
        BandKind::Normal => Direction::Within,
        _ if bands.normal.is_above(range) => Direction::Below,
        _ => Direction::Above,
    };
    let status = match (kind, direction) {
        (BandKind::Normal, _) => Status::Normal,
        (BandKind::Borderline, _) => Status::Borderline,
        (BandKind::Critical, _) => Status::Critical,
        (BandKind::RedFlag, Direction::Below) => Status::Low,
        (BandKind::RedFlag, _) => Status::High,
    };

    let converted = (normalize_unit(&parameter.unit) != normalize_unit(&entry.unit)).then(|| {
        Measurement {
            value,
            unit: entry.unit.clone(),
        }
    });

    Classification::Classified(ClassifiedParameter {
        parameter: parameter.name.clone(),
        key: entry.parameter.clone(),
        value: parameter.value,
        unit: parameter.unit.clone(),
        converted,
        status,
        direction,
        severity: status.severity(),
        classification_used: entry.source,
        guideline_reference: format!(
            "{} {}: {}",
            entry.source,
            kind.label(),
            range.describe(&entry.unit)
        ),
    })
}

fn incomplete(parameter: &Parameter, reason: IncompleteReason) -> Classification {
    Classification::Incomplete(IncompleteMarker {
        parameter: parameter.name.clone(),
        reason,
    })
}
