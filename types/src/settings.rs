//! Resolved configuration types shared across crates.
//!
//! These types represent fully-validated, resolved configuration state.
//! Raw TOML deserialization structs (with `Option` fields) stay private in
//! `footprint-config`. The config loader resolves them into these types at the
//! parse boundary.
//!
//! Existence of a value is the proof of its validity.

use serde::Deserialize;

use crate::OwnerId;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("minimum quantity must be a finite number greater than 0 (got {0})")]
pub struct MinQuantityError(pub f64);

/// Smallest quantity an entry may be submitted with.
///
/// Invariant: finite and strictly positive (enforced via `#[serde(try_from)]`
/// at the deserialization boundary).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct MinQuantity(f64);

impl MinQuantity {
    pub const DEFAULT: MinQuantity = MinQuantity(0.01);

    pub fn new(value: f64) -> Result<Self, MinQuantityError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(MinQuantityError(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for MinQuantity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for MinQuantity {
    type Error = MinQuantityError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Engine settings after config resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    min_quantity: MinQuantity,
    default_owner: OwnerId,
}

impl Settings {
    #[must_use]
    pub fn new(min_quantity: MinQuantity, default_owner: OwnerId) -> Self {
        Self {
            min_quantity,
            default_owner,
        }
    }

    #[must_use]
    pub const fn min_quantity(&self) -> MinQuantity {
        self.min_quantity
    }

    /// Owner used when the authentication collaborator has no signed-in user.
    #[must_use]
    pub fn default_owner(&self) -> &OwnerId {
        &self.default_owner
    }

    /// Resolve the owner for an entry: the signed-in user if any, else the default.
    #[must_use]
    pub fn owner_or_default(&self, owner: Option<OwnerId>) -> OwnerId {
        owner.unwrap_or_else(|| self.default_owner.clone())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(MinQuantity::DEFAULT, OwnerId::placeholder())
    }
}
