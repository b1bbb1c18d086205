//! Emission catalog: categories → items and units → CO2e factors.
//!
//! The catalog is immutable once constructed. The built-in table is compiled
//! in and initialised once per process on first use; readers share it without
//! synchronisation.

mod builtin;

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

use thiserror::Error;

use footprint_types::{CategoryKey, ItemKey, UnitKey};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(builtin::catalog);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("category {0} is not in the catalog")]
    CategoryNotFound(CategoryKey),
    #[error("item {item} is not defined for category {category}")]
    ItemNotFound { category: CategoryKey, item: ItemKey },
    #[error("unit {unit} is not defined for category {category}")]
    UnitNotFound { category: CategoryKey, unit: UnitKey },
    #[error("category {0} is defined more than once")]
    DuplicateCategory(CategoryKey),
    #[error("category {0} must define at least one item")]
    NoItems(CategoryKey),
    #[error("category {0} must define at least one unit")]
    NoUnits(CategoryKey),
    #[error("item {item} is defined more than once in category {category}")]
    DuplicateItem { category: CategoryKey, item: ItemKey },
    #[error("unit {unit} is defined more than once in category {category}")]
    DuplicateUnit { category: CategoryKey, unit: UnitKey },
    #[error("unit {unit} in category {category} has invalid factor {factor}")]
    InvalidFactor {
        category: CategoryKey,
        unit: UnitKey,
        factor: f64,
    },
}

impl CatalogError {
    /// True for lookups of keys the catalog does not define.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::CategoryNotFound(_)
                | CatalogError::ItemNotFound { .. }
                | CatalogError::UnitNotFound { .. }
        )
    }
}

// ============================================================================
// Options
// ============================================================================

/// A selectable item within a category. Descriptive only; carries no factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOption {
    key: ItemKey,
    label: Cow<'static, str>,
}

impl ItemOption {
    #[must_use]
    pub const fn fixed(key: &'static str, label: &'static str) -> Self {
        Self {
            key: ItemKey::from_static(key),
            label: Cow::Borrowed(label),
        }
    }

    #[must_use]
    pub fn new(key: ItemKey, label: impl Into<String>) -> Self {
        Self {
            key,
            label: Cow::Owned(label.into()),
        }
    }

    #[must_use]
    pub fn key(&self) -> &ItemKey {
        &self.key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A measurement unit within a category, with its kg CO2e per one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitOption {
    key: UnitKey,
    label: Cow<'static, str>,
    co2e_factor: f64,
}

impl UnitOption {
    #[must_use]
    pub const fn fixed(key: &'static str, label: &'static str, co2e_factor: f64) -> Self {
        Self {
            key: UnitKey::from_static(key),
            label: Cow::Borrowed(label),
            co2e_factor,
        }
    }

    #[must_use]
    pub fn new(key: UnitKey, label: impl Into<String>, co2e_factor: f64) -> Self {
        Self {
            key,
            label: Cow::Owned(label.into()),
            co2e_factor,
        }
    }

    #[must_use]
    pub fn key(&self) -> &UnitKey {
        &self.key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn co2e_factor(&self) -> f64 {
        self.co2e_factor
    }
}

// ============================================================================
// Category Definitions
// ============================================================================

/// One category with its ordered items and units.
///
/// # Invariants
///
/// - At least one item and at least one unit
/// - Item keys and unit keys are unique within the category
/// - Every factor is finite and non-negative
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDefinition {
    key: CategoryKey,
    label: Cow<'static, str>,
    items: Vec<ItemOption>,
    units: Vec<UnitOption>,
}

impl CategoryDefinition {
    pub fn new(
        key: CategoryKey,
        label: impl Into<Cow<'static, str>>,
        items: Vec<ItemOption>,
        units: Vec<UnitOption>,
    ) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::NoItems(key));
        }
        if units.is_empty() {
            return Err(CatalogError::NoUnits(key));
        }

        let mut seen_items = HashSet::new();
        for item in &items {
            if !seen_items.insert(item.key()) {
                return Err(CatalogError::DuplicateItem {
                    category: key,
                    item: item.key().clone(),
                });
            }
        }

        let mut seen_units = HashSet::new();
        for unit in &units {
            if !seen_units.insert(unit.key()) {
                return Err(CatalogError::DuplicateUnit {
                    category: key,
                    unit: unit.key().clone(),
                });
            }
            let factor = unit.co2e_factor();
            if !factor.is_finite() || factor < 0.0 {
                return Err(CatalogError::InvalidFactor {
                    category: key,
                    unit: unit.key().clone(),
                    factor,
                });
            }
        }

        Ok(Self {
            key,
            label: label.into(),
            items,
            units,
        })
    }

    #[must_use]
    pub const fn key(&self) -> CategoryKey {
        self.key
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn items(&self) -> &[ItemOption] {
        &self.items
    }

    #[must_use]
    pub fn units(&self) -> &[UnitOption] {
        &self.units
    }

    #[must_use]
    pub fn item(&self, key: &ItemKey) -> Option<&ItemOption> {
        self.items.iter().find(|item| item.key() == key)
    }

    #[must_use]
    pub fn unit(&self, key: &UnitKey) -> Option<&UnitOption> {
        self.units.iter().find(|unit| unit.key() == key)
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Ordered set of category definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<CategoryDefinition>,
}

impl Catalog {
    /// Build a catalog from explicit definitions, rejecting duplicate categories.
    pub fn new(categories: Vec<CategoryDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for definition in &categories {
            if !seen.insert(definition.key()) {
                return Err(CatalogError::DuplicateCategory(definition.key()));
            }
        }
        Ok(Self { categories })
    }

    /// The compiled-in catalog, shared for the lifetime of the process.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    pub fn category(&self, key: CategoryKey) -> Result<&CategoryDefinition, CatalogError> {
        self.categories
            .iter()
            .find(|definition| definition.key() == key)
            .ok_or(CatalogError::CategoryNotFound(key))
    }

    pub fn items_for(&self, category: CategoryKey) -> Result<&[ItemOption], CatalogError> {
        self.category(category).map(CategoryDefinition::items)
    }

    pub fn units_for(&self, category: CategoryKey) -> Result<&[UnitOption], CatalogError> {
        self.category(category).map(CategoryDefinition::units)
    }

    pub fn item(&self, category: CategoryKey, item: &ItemKey) -> Result<&ItemOption, CatalogError> {
        self.category(category)?
            .item(item)
            .ok_or_else(|| CatalogError::ItemNotFound {
                category,
                item: item.clone(),
            })
    }

    pub fn unit(&self, category: CategoryKey, unit: &UnitKey) -> Result<&UnitOption, CatalogError> {
        self.category(category)?
            .unit(unit)
            .ok_or_else(|| CatalogError::UnitNotFound {
                category,
                unit: unit.clone(),
            })
    }

    pub fn factor_for(&self, category: CategoryKey, unit: &UnitKey) -> Result<f64, CatalogError> {
        self.unit(category, unit).map(UnitOption::co2e_factor)
    }

    #[must_use]
    pub fn contains_item(&self, category: CategoryKey, item: &ItemKey) -> bool {
        self.item(category, item).is_ok()
    }

    #[must_use]
    pub fn contains_unit(&self, category: CategoryKey, unit: &UnitKey) -> bool {
        self.unit(category, unit).is_ok()
    }
}
