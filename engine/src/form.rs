//! One in-progress entry: selection, live preview, and submission.

use thiserror::Error;

use footprint_types::{Co2e, EmissionLogEntry, FieldErrors, OwnerId};

use crate::catalog::{Catalog, CatalogError};
use crate::entry::{Clock, EntryBuilder, IdGenerator, SystemClock, UuidIds};
use crate::quantify::compute_co2e;
use crate::selection::{FieldEdit, Selection, SelectionError, SelectionState};
use crate::validation::{ValidatedSelection, Validator};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("entry has invalid fields: {0}")]
    Invalid(#[from] FieldErrors),
    #[error("no CO2e estimate is available for this selection")]
    NoEstimate,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Selection plus its CO2e preview, kept in step on every edit.
///
/// The preview is recomputed inside the same call that applies an edit, so
/// there is never a moment where the selection has changed and the preview
/// has not.
#[derive(Debug)]
pub struct EntryForm<'c, C = SystemClock, G = UuidIds> {
    builder: EntryBuilder<'c, C, G>,
    validator: Validator,
    selection: Selection,
    preview: Option<Co2e>,
}

impl<'c> EntryForm<'c> {
    #[must_use]
    pub fn new(catalog: &'c Catalog, validator: Validator) -> Self {
        Self::with_builder(EntryBuilder::new(catalog), validator)
    }
}

impl<'c, C: Clock, G: IdGenerator> EntryForm<'c, C, G> {
    #[must_use]
    pub fn with_builder(builder: EntryBuilder<'c, C, G>, validator: Validator) -> Self {
        Self {
            builder,
            validator,
            selection: Selection::new(),
            preview: None,
        }
    }

    fn catalog(&self) -> &'c Catalog {
        self.builder.catalog()
    }

    /// Apply one edit and refresh the preview. On error nothing changes.
    pub fn apply(&mut self, edit: FieldEdit) -> Result<(), SelectionError> {
        let catalog = self.catalog();
        self.selection.apply(catalog, edit)?;
        self.refresh_preview();
        Ok(())
    }

    fn refresh_preview(&mut self) {
        self.preview = compute_co2e(
            self.catalog(),
            self.selection.category(),
            self.selection.unit(),
            self.selection.quantity(),
        );
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Current estimate, or `None` while inputs are incomplete.
    #[must_use]
    pub fn preview(&self) -> Option<Co2e> {
        self.preview
    }

    pub fn validate(&self) -> Result<ValidatedSelection, FieldErrors> {
        self.validator.validate(self.catalog(), &self.selection)
    }

    /// Validate, quantify, and build. The form resets only when an entry is returned.
    pub fn submit(&mut self, owner: &OwnerId) -> Result<EmissionLogEntry, SubmitError> {
        let validated = self.validate()?;
        let co2e = compute_co2e(
            self.catalog(),
            Some(validated.category()),
            Some(validated.unit()),
            validated.quantity(),
        )
        .ok_or(SubmitError::NoEstimate)?;
        let entry = self.builder.build(&validated, co2e, owner)?;

        tracing::info!(
            id = %entry.id(),
            category = %entry.category(),
            co2e = entry.co2e().kg(),
            "emission entry submitted"
        );

        self.selection.reset();
        self.preview = None;
        Ok(entry)
    }
}
