use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use ts_rs::TS;

use crate::GuidelineTable;
use crate::entry::GuidelineEntry;
use crate::error::GuidelineError;

/// Current document format. Bump when the entry shape changes.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk / on-wire form of a guideline table.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuidelineDocument {
    /// Missing or 0 = written before the format was versioned.
    #[serde(default)]
    pub format_version: u32,
    pub version: String,
    pub effective_date: jiff::civil::Date,
    pub entries: Vec<GuidelineEntry>,
}

impl GuidelineTable {
    pub fn from_json(json: &str) -> Result<Self, GuidelineError> {
        let doc: GuidelineDocument = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    pub fn from_document(doc: GuidelineDocument) -> Result<Self, GuidelineError> {
        if doc.format_version > FORMAT_VERSION {
            return Err(GuidelineError::UnsupportedFormat {
                found: doc.format_version,
                supported: FORMAT_VERSION,
            });
        }
        if doc.format_version == 0 {
            info!(version = %doc.version, "guideline document has no format_version, reading as v1");
        }
        Self::new(doc.version, doc.effective_date, doc.entries)
    }

    /// Load an override table from a JSON file.
    pub fn load(path: &Path) -> Result<Self, GuidelineError> {
        let contents = std::fs::read_to_string(path).map_err(|e| GuidelineError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let table = Self::from_json(&contents)?;
        info!(
            path = %path.display(),
            version = %table.version(),
            entries = table.entries().len(),
            "guideline table loaded"
        );
        Ok(table)
    }

    pub fn to_document(&self) -> GuidelineDocument {
        GuidelineDocument {
            format_version: FORMAT_VERSION,
            version: self.version().to_string(),
            effective_date: self.effective_date(),
            entries: self.entries().to_vec(),
        }
    }
}
