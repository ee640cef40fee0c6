use serde::{Deserialize, Serialize};
use ts_rs::TS;

use mitra_core::models::classification::GuidelineSource;
use mitra_core::models::patient::Sex;

use crate::range::BandSet;

/// Reference ranges for one parameter, as published by a guideline body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuidelineEntry {
    /// Canonical key, e.g. `blood_sugar_fasting`.
    pub parameter: String,
    pub display_name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Unit the bands are expressed in.
    pub unit: String,
    #[serde(flatten)]
    pub bands: BandSet,
    /// Bands that replace the default ones for female patients.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub female: Option<BandSet>,
    pub source: GuidelineSource,
}

impl GuidelineEntry {
    pub fn bands_for(&self, sex: Sex) -> &BandSet {
        match (sex, &self.female) {
            (Sex::Female, Some(female)) => female,
            _ => &self.bands,
        }
    }

    /// Every name this entry answers to: key, display name, aliases.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        [self.parameter.as_str(), self.display_name.as_str()]
            .into_iter()
            .chain(self.aliases.iter().map(String::as_str))
    }
}
