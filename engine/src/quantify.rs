//! CO2e derivation.

use footprint_types::{CategoryKey, Co2e, UnitKey};

use crate::catalog::{Catalog, CatalogError};

/// Estimate CO2e for a (possibly incomplete) set of inputs.
///
/// Returns `None` when there is no answer yet: category or unit unset, unit not
/// defined for the category, or quantity not a positive finite number. A
/// computed zero is `Some(Co2e::ZERO)`, never `None`.
#[must_use]
pub fn compute_co2e(
    catalog: &Catalog,
    category: Option<CategoryKey>,
    unit: Option<&UnitKey>,
    quantity: f64,
) -> Option<Co2e> {
    let (category, unit) = (category?, unit?);
    if !quantity.is_finite() || quantity <= 0.0 {
        return None;
    }
    match catalog.factor_for(category, unit) {
        Ok(factor) => Co2e::from_product(quantity, factor),
        // A unit from another category is an ordinary mismatch; a missing
        // category means the catalog and caller disagree.
        Err(err @ CatalogError::UnitNotFound { .. }) => {
            tracing::debug!(%err, "no CO2e factor for this unit");
            None
        }
        Err(err) => {
            tracing::warn!(%err, "CO2e factor lookup failed");
            None
        }
    }
}
