//! User-facing validation failures.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::{CategoryKey, ItemKey, UnitKey};

/// A field of an in-progress entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Category,
    Item,
    Unit,
    Quantity,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Category => "category",
            Field::Item => "item",
            Field::Unit => "unit",
            Field::Quantity => "quantity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failed field check, naming the field and why it failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("please select an emission category")]
    CategoryMissing,
    #[error("please select an item")]
    ItemMissing,
    #[error("please select a unit")]
    UnitMissing,
    #[error("item {item} cannot be checked until a category is selected")]
    ItemWithoutCategory { item: ItemKey },
    #[error("unit {unit} cannot be checked until a category is selected")]
    UnitWithoutCategory { unit: UnitKey },
    #[error("item {item} is not available for category {category}")]
    ItemNotInCategory { item: ItemKey, category: CategoryKey },
    #[error("unit {unit} is not available for category {category}")]
    UnitNotInCategory { unit: UnitKey, category: CategoryKey },
    #[error("quantity must be a finite number")]
    QuantityNotFinite,
    #[error("quantity must be greater than 0")]
    QuantityNotPositive,
    #[error("quantity must be at least {min}")]
    QuantityBelowMinimum { min: f64 },
}

impl FieldError {
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            FieldError::CategoryMissing => Field::Category,
            FieldError::ItemMissing
            | FieldError::ItemWithoutCategory { .. }
            | FieldError::ItemNotInCategory { .. } => Field::Item,
            FieldError::UnitMissing
            | FieldError::UnitWithoutCategory { .. }
            | FieldError::UnitNotInCategory { .. } => Field::Unit,
            FieldError::QuantityNotFinite
            | FieldError::QuantityNotPositive
            | FieldError::QuantityBelowMinimum { .. } => Field::Quantity,
        }
    }
}

/// Every failed check for a selection, in check order. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// `None` when there is nothing to report.
    #[must_use]
    pub fn from_vec(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Errors for a single field.
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.0.iter().filter(move |err| err.field() == field)
    }

    #[must_use]
    pub fn has_field(&self, field: Field) -> bool {
        self.for_field(field).next().is_some()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {err}", err.field())?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
