//! Entry assembly and the collaborators it stamps entries with.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use footprint_types::{Co2e, EmissionLogEntry, EntryId, EntryParts, OwnerId};

use crate::catalog::{Catalog, CatalogError};
use crate::validation::ValidatedSelection;

/// Source of capture timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that always reads the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Source of fresh entry ids.
pub trait IdGenerator {
    fn next_id(&self) -> EntryId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> EntryId {
        EntryId::new(Uuid::new_v4().to_string()).expect("uuid text is never empty")
    }
}

/// `entry-1`, `entry-2`, ... in issue order.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> EntryId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        EntryId::new(format!("entry-{n}")).expect("formatted id is never empty")
    }
}

/// Assembles finished entries from validated selections.
///
/// The builder does no quantification of its own: the caller passes the CO2e
/// it already computed for the same selection.
#[derive(Debug)]
pub struct EntryBuilder<'c, C = SystemClock, G = UuidIds> {
    catalog: &'c Catalog,
    clock: C,
    ids: G,
}

impl<'c> EntryBuilder<'c> {
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_collaborators(catalog, SystemClock, UuidIds)
    }
}

impl<'c, C: Clock, G: IdGenerator> EntryBuilder<'c, C, G> {
    #[must_use]
    pub fn with_collaborators(catalog: &'c Catalog, clock: C, ids: G) -> Self {
        Self {
            catalog,
            clock,
            ids,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Stamp a fresh id and the current time, then assemble.
    pub fn build(
        &self,
        selection: &ValidatedSelection,
        co2e: Co2e,
        owner: &OwnerId,
    ) -> Result<EmissionLogEntry, CatalogError> {
        self.build_at(selection, co2e, owner, self.ids.next_id(), self.clock.now())
    }

    /// Assemble an entry with an explicit id and timestamp.
    ///
    /// Labels are resolved through the catalog here so the entry carries them
    /// even if the catalog changes later.
    pub fn build_at(
        &self,
        selection: &ValidatedSelection,
        co2e: Co2e,
        owner: &OwnerId,
        id: EntryId,
        now: DateTime<Utc>,
    ) -> Result<EmissionLogEntry, CatalogError> {
        let category = selection.category();
        let item = self.catalog.item(category, selection.item())?;
        let unit = self.catalog.unit(category, selection.unit())?;

        Ok(EmissionLogEntry::new(EntryParts {
            id,
            owner_id: owner.clone(),
            created_at: now,
            category,
            item: item.key().clone(),
            item_label: item.label().to_string(),
            quantity: selection.quantity(),
            unit: unit.key().clone(),
            unit_label: unit.label().to_string(),
            co2e,
            notes: selection.notes().cloned(),
        }))
    }
}
