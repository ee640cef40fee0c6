//! Built-in guideline entries, grouped by panel.

pub mod cardiovascular;
pub mod endocrine;
pub mod glycemic;
pub mod hematology;
pub mod hepatic;
pub mod lipids;
pub mod renal;

use mitra_core::models::classification::GuidelineSource;

use crate::entry::GuidelineEntry;
use crate::range::BandSet;

/// Every built-in entry, in display order.
pub fn all_entries() -> Vec<GuidelineEntry> {
    [
        glycemic::entries(),
        lipids::entries(),
        cardiovascular::entries(),
        renal::entries(),
        hematology::entries(),
        hepatic::entries(),
        endocrine::entries(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn entry(
    parameter: &str,
    display_name: &str,
    aliases: &[&str],
    unit: &str,
    source: GuidelineSource,
    bands: BandSet,
) -> GuidelineEntry {
    GuidelineEntry {
        parameter: parameter.to_string(),
        display_name: display_name.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
        unit: unit.to_string(),
        bands,
        female: None,
        source,
    }
}

fn with_female(mut entry: GuidelineEntry, bands: BandSet) -> GuidelineEntry {
    entry.female = Some(bands);
    entry
}
