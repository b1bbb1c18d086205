//! Selection state machine for one in-progress entry.
//!
//! ```text
//! Empty --Category--> CategoryChosen --Item/Unit/Quantity--> Valid | Invalid
//!   ^                      |   ^                               |
//!   |                      |   +----------- Category ----------+
//!   +------- reset --------+-------------------------------------
//! ```
//!
//! Edits go through [`Selection::apply`], which computes the whole next state
//! before committing it. `set_quantity` and `set_notes` are plain assignments
//! since nothing depends on those fields. A category change drops any item or
//! unit that the new category does not define; it never substitutes a
//! replacement.

use thiserror::Error;

use footprint_types::{CategoryKey, Field, ItemKey, Notes, UnitKey};

use crate::catalog::{Catalog, CatalogError};

/// A single field edit.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Category(CategoryKey),
    Item(ItemKey),
    Unit(UnitKey),
    Quantity(f64),
    /// Blank text clears the notes.
    Notes(String),
}

impl FieldEdit {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            FieldEdit::Category(_) => "category",
            FieldEdit::Item(_) => "item",
            FieldEdit::Unit(_) => "unit",
            FieldEdit::Quantity(_) => "quantity",
            FieldEdit::Notes(_) => "notes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("select a category before choosing the {field}")]
    NoCategory { field: Field },
    #[error("{field} {key} is not available for category {category}")]
    InvalidSelection {
        field: Field,
        key: String,
        category: CategoryKey,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// No category chosen.
    Empty,
    /// Category chosen; item or unit still unset.
    CategoryChosen,
    /// Category, item, and unit set, quantity > 0.
    Valid,
    /// Category, item, and unit set, but quantity ≤ 0 or not a number.
    Invalid,
}

impl SelectionState {
    #[must_use]
    pub const fn can_submit(self) -> bool {
        matches!(self, SelectionState::Valid)
    }
}

/// Field choices for one entry before submission.
///
/// Item and unit keys are weak references into the catalog. The transition
/// rules keep them consistent with the category, but consumers still resolve
/// them through the catalog rather than assuming they exist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    category: Option<CategoryKey>,
    item: Option<ItemKey>,
    unit: Option<UnitKey>,
    quantity: f64,
    notes: Option<Notes>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one edit. On error the selection is left unchanged.
    pub fn apply(&mut self, catalog: &Catalog, edit: FieldEdit) -> Result<(), SelectionError> {
        let next = self.next(catalog, &edit)?;
        tracing::debug!(
            field = edit.name(),
            category = ?next.category,
            cleared_item = self.item.is_some() && next.item.is_none(),
            cleared_unit = self.unit.is_some() && next.unit.is_none(),
            "selection updated"
        );
        *self = next;
        Ok(())
    }

    fn next(&self, catalog: &Catalog, edit: &FieldEdit) -> Result<Self, SelectionError> {
        let mut next = self.clone();
        match edit {
            FieldEdit::Category(key) => {
                let definition = catalog.category(*key)?;
                next.category = Some(*key);
                next.item = next.item.filter(|item| definition.item(item).is_some());
                next.unit = next.unit.filter(|unit| definition.unit(unit).is_some());
            }
            FieldEdit::Item(item) => {
                let category = self.require_category(Field::Item)?;
                if !catalog.contains_item(category, item) {
                    return Err(SelectionError::InvalidSelection {
                        field: Field::Item,
                        key: item.to_string(),
                        category,
                    });
                }
                next.item = Some(item.clone());
            }
            FieldEdit::Unit(unit) => {
                let category = self.require_category(Field::Unit)?;
                if !catalog.contains_unit(category, unit) {
                    return Err(SelectionError::InvalidSelection {
                        field: Field::Unit,
                        key: unit.to_string(),
                        category,
                    });
                }
                next.unit = Some(unit.clone());
            }
            FieldEdit::Quantity(quantity) => next.quantity = *quantity,
            FieldEdit::Notes(text) => next.notes = Notes::parse(text),
        }
        Ok(next)
    }

    fn require_category(&self, field: Field) -> Result<CategoryKey, SelectionError> {
        self.category.ok_or(SelectionError::NoCategory { field })
    }

    pub fn set_category(
        &mut self,
        catalog: &Catalog,
        key: CategoryKey,
    ) -> Result<(), SelectionError> {
        self.apply(catalog, FieldEdit::Category(key))
    }

    pub fn set_item(
        &mut self,
        catalog: &Catalog,
        key: impl Into<ItemKey>,
    ) -> Result<(), SelectionError> {
        self.apply(catalog, FieldEdit::Item(key.into()))
    }

    pub fn set_unit(
        &mut self,
        catalog: &Catalog,
        key: impl Into<UnitKey>,
    ) -> Result<(), SelectionError> {
        self.apply(catalog, FieldEdit::Unit(key.into()))
    }

    /// Accepts any number; positivity is checked at preview and submission.
    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
    }

    pub fn set_notes(&mut self, text: &str) {
        self.notes = Notes::parse(text);
    }

    /// Back to `Empty`, as after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        match (&self.category, &self.item, &self.unit) {
            (None, _, _) => SelectionState::Empty,
            (Some(_), Some(_), Some(_)) => {
                if self.quantity.is_finite() && self.quantity > 0.0 {
                    SelectionState::Valid
                } else {
                    SelectionState::Invalid
                }
            }
            (Some(_), _, _) => SelectionState::CategoryChosen,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Option<CategoryKey> {
        self.category
    }

    #[must_use]
    pub fn item(&self) -> Option<&ItemKey> {
        self.item.as_ref()
    }

    #[must_use]
    pub fn unit(&self) -> Option<&UnitKey> {
        self.unit.as_ref()
    }

    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    #[must_use]
    pub fn notes(&self) -> Option<&Notes> {
        self.notes.as_ref()
    }
}
