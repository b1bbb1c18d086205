//! Session entry log.
//!
//! Holds the entries submitted during one session, newest first, and sums
//! them per category for summary displays. Nothing here outlives the session.

use footprint_types::{CategoryKey, Co2e, EmissionLogEntry};

use crate::catalog::Catalog;

/// Summed CO2e for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: CategoryKey,
    pub label: String,
    pub entries: usize,
    pub co2e: Co2e,
}

#[derive(Debug, Clone, Default)]
pub struct EntryLog {
    entries: Vec<EmissionLogEntry>,
}

impl EntryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry at the front.
    pub fn record(&mut self, entry: EmissionLogEntry) {
        self.entries.insert(0, entry);
    }

    /// Entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[EmissionLogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> Co2e {
        self.entries.iter().map(EmissionLogEntry::co2e).sum()
    }

    /// One row per catalog category, in catalog order. Categories with no
    /// entries report zero.
    #[must_use]
    pub fn totals_by_category(&self, catalog: &Catalog) -> Vec<CategoryTotal> {
        catalog
            .categories()
            .iter()
            .map(|definition| {
                let matching: Vec<Co2e> = self
                    .entries
                    .iter()
                    .filter(|entry| entry.category() == definition.key())
                    .map(EmissionLogEntry::co2e)
                    .collect();
                CategoryTotal {
                    category: definition.key(),
                    label: definition.label().to_string(),
                    entries: matching.len(),
                    co2e: matching.into_iter().sum(),
                }
            })
            .collect()
    }
}
