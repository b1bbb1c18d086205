//! Finished emission log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CategoryKey, Co2e, EntryId, ItemKey, Notes, OwnerId, UnitKey};

/// Fields of a finished entry, as assembled by the engine's entry builder.
#[derive(Debug, Clone)]
pub struct EntryParts {
    pub id: EntryId,
    pub owner_id: OwnerId,
    pub created_at: DateTime<Utc>,
    pub category: CategoryKey,
    pub item: ItemKey,
    pub item_label: String,
    pub quantity: f64,
    pub unit: UnitKey,
    pub unit_label: String,
    pub co2e: Co2e,
    pub notes: Option<Notes>,
}

/// One logged activity with its CO2e estimate.
///
/// Labels are resolved at build time so the record stays self-describing even
/// if the catalog changes later. Immutable once built; serializes with an
/// RFC 3339 `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionLogEntry {
    id: EntryId,
    owner_id: OwnerId,
    created_at: DateTime<Utc>,
    category: CategoryKey,
    item: ItemKey,
    item_label: String,
    quantity: f64,
    unit: UnitKey,
    unit_label: String,
    co2e: Co2e,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<Notes>,
}

impl EmissionLogEntry {
    #[must_use]
    pub fn new(parts: EntryParts) -> Self {
        let EntryParts {
            id,
            owner_id,
            created_at,
            category,
            item,
            item_label,
            quantity,
            unit,
            unit_label,
            co2e,
            notes,
        } = parts;
        Self {
            id,
            owner_id,
            created_at,
            category,
            item,
            item_label,
            quantity,
            unit,
            unit_label,
            co2e,
            notes,
        }
    }

    #[must_use]
    pub fn id(&self) -> &EntryId {
        &self.id
    }

    #[must_use]
    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn category(&self) -> CategoryKey {
        self.category
    }

    #[must_use]
    pub fn item(&self) -> &ItemKey {
        &self.item
    }

    #[must_use]
    pub fn item_label(&self) -> &str {
        &self.item_label
    }

    #[must_use]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    #[must_use]
    pub fn unit(&self) -> &UnitKey {
        &self.unit
    }

    #[must_use]
    pub fn unit_label(&self) -> &str {
        &self.unit_label
    }

    #[must_use]
    pub fn co2e(&self) -> Co2e {
        self.co2e
    }

    #[must_use]
    pub fn notes(&self) -> Option<&Notes> {
        self.notes.as_ref()
    }
}
