//! Submission checks for a selection.

use footprint_types::{
    CategoryKey, FieldError, FieldErrors, ItemKey, MinQuantity, Notes, Settings, UnitKey,
};

use crate::catalog::Catalog;
use crate::selection::Selection;

/// Proof that a selection passed every submission check.
///
/// Only [`Validator::validate`] constructs this, and it is the only input the
/// entry builder accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSelection {
    category: CategoryKey,
    item: ItemKey,
    unit: UnitKey,
    quantity: f64,
    notes: Option<Notes>,
}

impl ValidatedSelection {
    #[must_use]
    pub const fn category(&self) -> CategoryKey {
        self.category
    }

    #[must_use]
    pub fn item(&self) -> &ItemKey {
        &self.item
    }

    #[must_use]
    pub fn unit(&self) -> &UnitKey {
        &self.unit
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

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Validator {
    min_quantity: MinQuantity,
}

impl Validator {
    #[must_use]
    pub const fn new(min_quantity: MinQuantity) -> Self {
        Self { min_quantity }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.min_quantity())
    }

    #[must_use]
    pub const fn min_quantity(&self) -> MinQuantity {
        self.min_quantity
    }

    /// Run every check and collect all failures, in field order.
    pub fn validate(
        &self,
        catalog: &Catalog,
        selection: &Selection,
    ) -> Result<ValidatedSelection, FieldErrors> {
        let mut errors = Vec::new();
        let category = selection.category();

        if category.is_none() {
            errors.push(FieldError::CategoryMissing);
        }

        let item = match (selection.item(), category) {
            (None, _) => {
                errors.push(FieldError::ItemMissing);
                None
            }
            (Some(item), None) => {
                errors.push(FieldError::ItemWithoutCategory { item: item.clone() });
                None
            }
            (Some(item), Some(category)) if !catalog.contains_item(category, item) => {
                errors.push(FieldError::ItemNotInCategory {
                    item: item.clone(),
                    category,
                });
                None
            }
            (Some(item), Some(_)) => Some(item),
        };

        let unit = match (selection.unit(), category) {
            (None, _) => {
                errors.push(FieldError::UnitMissing);
                None
            }
            (Some(unit), None) => {
                errors.push(FieldError::UnitWithoutCategory { unit: unit.clone() });
                None
            }
            (Some(unit), Some(category)) if !catalog.contains_unit(category, unit) => {
                errors.push(FieldError::UnitNotInCategory {
                    unit: unit.clone(),
                    category,
                });
                None
            }
            (Some(unit), Some(_)) => Some(unit),
        };

        if let Some(err) = self.check_quantity(selection.quantity()) {
            errors.push(err);
        }

        if let Some(errors) = FieldErrors::from_vec(errors) {
            return Err(errors);
        }

        // Every unset field pushed an error above; this only restates it.
        let (Some(category), Some(item), Some(unit)) = (category, item, unit) else {
            let missing = match (category, item) {
                (None, _) => FieldError::CategoryMissing,
                (Some(_), None) => FieldError::ItemMissing,
                (Some(_), Some(_)) => FieldError::UnitMissing,
            };
            return Err(FieldErrors::from(missing));
        };

        Ok(ValidatedSelection {
            category,
            item: item.clone(),
            unit: unit.clone(),
            quantity: selection.quantity(),
            notes: selection.notes().cloned(),
        })
    }

    fn check_quantity(&self, quantity: f64) -> Option<FieldError> {
        if !quantity.is_finite() {
            Some(FieldError::QuantityNotFinite)
        } else if quantity <= 0.0 {
            Some(FieldError::QuantityNotPositive)
        } else if quantity < self.min_quantity.value() {
            Some(FieldError::QuantityBelowMinimum {
                min: self.min_quantity.value(),
            })
        } else {
            None
        }
    }
}
