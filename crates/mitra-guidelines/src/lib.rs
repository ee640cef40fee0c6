//! mitra-guidelines
//!
//! The versioned guideline table: reference ranges per lab parameter, name
//! normalisation and unit conversion. Pure data plus lookup — loaded once at
//! process start and shared read-only.

pub mod entries;
pub mod entry;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod range;
pub mod units;

use std::collections::HashMap;
use std::sync::LazyLock;

use entry::GuidelineEntry;
use error::GuidelineError;
use normalize::normalize_name;

/// Identifier of the compiled-in table.
pub const BUILTIN_VERSION: &str = "2025.1";

/// An immutable, versioned set of guideline entries indexed by normalised name.
#[derive(Debug, Clone)]
pub struct GuidelineTable {
    version: String,
    effective_date: jiff::civil::Date,
    entries: Vec<GuidelineEntry>,
    index: HashMap<String, usize>,
}

impl GuidelineTable {
    /// Build and validate a table.
    pub fn new(
        version: impl Into<String>,
        effective_date: jiff::civil::Date,
        entries: Vec<GuidelineEntry>,
    ) -> Result<Self, GuidelineError> {
        if entries.is_empty() {
            return Err(GuidelineError::Empty);
        }
        let table = Self::assemble(version.into(), effective_date, entries);
        table.validate()?;
        Ok(table)
    }

    /// The compiled-in table. Built on first use.
    pub fn builtin() -> &'static GuidelineTable {
        static BUILTIN: LazyLock<GuidelineTable> = LazyLock::new(|| {
            GuidelineTable::assemble(
                BUILTIN_VERSION.to_string(),
                jiff::civil::date(2025, 1, 1),
                entries::all_entries(),
            )
        });
        &BUILTIN
    }

    fn assemble(version: String, effective_date: jiff::civil::Date, entries: Vec<GuidelineEntry>) -> Self {
        let mut index = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            for name in entry.names() {
                index.entry(normalize_name(name)).or_insert(i);
            }
        }
        Self {
            version,
            effective_date,
            entries,
            index,
        }
    }

    /// Check name uniqueness across entries and band coverage of every entry.
    pub fn validate(&self) -> Result<(), GuidelineError> {
        let mut owners: HashMap<String, usize> = HashMap::new();
        for (i, entry) in self.entries.iter().enumerate() {
            for name in entry.names() {
                let normalized = normalize_name(name);
                match owners.get(&normalized) {
                    Some(&owner) if owner != i => {
                        return Err(GuidelineError::DuplicateName {
                            name: name.to_string(),
                            normalized,
                            first: self.entries[owner].parameter.clone(),
                            second: entry.parameter.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        owners.insert(normalized, i);
                    }
                }
            }

            entry.bands.check(&entry.parameter)?;
            if let Some(female) = &entry.female {
                female.check(&entry.parameter)?;
            }
        }
        Ok(())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn effective_date(&self) -> jiff::civil::Date {
        self.effective_date
    }

    pub fn entries(&self) -> &[GuidelineEntry] {
        &self.entries
    }

    /// Find the entry for a parameter name as it appears on a report.
    pub fn lookup(&self, name: &str) -> Option<&GuidelineEntry> {
        self.index
            .get(&normalize_name(name))
            .map(|&i| &self.entries[i])
    }

    /// Find an entry by its canonical key.
    pub fn get(&self, key: &str) -> Option<&GuidelineEntry> {
        self.entries.iter().find(|e| e.parameter == key)
    }
}
