//! Emission engine for Footprint.
//!
//! Owns the emission catalog, the per-entry selection state machine, CO2e
//! quantification, submission checks, and entry assembly. No IO happens here
//! beyond `tracing` events; callers hand in a catalog and get values back.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod catalog;
mod entry;
mod form;
mod log;
mod quantify;
mod selection;
mod validation;

pub use catalog::{Catalog, CatalogError, CategoryDefinition, ItemOption, UnitOption};
pub use entry::{
    Clock, EntryBuilder, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidIds,
};
pub use form::{EntryForm, SubmitError};
pub use log::{CategoryTotal, EntryLog};
pub use quantify::compute_co2e;
pub use selection::{FieldEdit, Selection, SelectionError, SelectionState};
pub use validation::{ValidatedSelection, Validator};

pub use footprint_types::{
    CategoryKey, Co2e, EmissionLogEntry, EntryId, Field, FieldError, FieldErrors, ItemKey,
    MinQuantity, Notes, OwnerId, Settings, UnitKey,
};
