//! Core domain types for Footprint.
//!
//! Categories, catalog keys, CO2e amounts, field errors, and the finished
//! log entry. Nothing here does IO; the engine and the binary share these.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod co2e;
mod entry;
mod field;
mod ids;
mod keys;
mod proofs;
mod settings;

pub use co2e::{Co2e, InvalidCo2e, round_to_cents};
pub use entry::{EmissionLogEntry, EntryParts};
pub use field::{Field, FieldError, FieldErrors};
pub use ids::{EntryId, OwnerId};
pub use keys::{ItemKey, UnitKey};
pub use proofs::{EmptyStringError, NonEmptyString, Notes};
pub use settings::{MinQuantity, MinQuantityError, Settings};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Category Keys
// ============================================================================

/// Top-level emission categories.
///
/// The set is closed: every category the catalog knows about is a variant here,
/// so an unknown category can only appear at a string boundary (CLI arguments,
/// deserialized input) and is rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Cooking,
    Food,
    Waste,
    Clothing,
    Necessities,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown emission category: {0}")]
pub struct UnknownCategory(pub String);

impl CategoryKey {
    pub const ALL: [CategoryKey; 6] = [
        CategoryKey::Cooking,
        CategoryKey::Food,
        CategoryKey::Waste,
        CategoryKey::Clothing,
        CategoryKey::Necessities,
        CategoryKey::Transport,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CategoryKey::Cooking => "cooking",
            CategoryKey::Food => "food",
            CategoryKey::Waste => "waste",
            CategoryKey::Clothing => "clothing",
            CategoryKey::Necessities => "necessities",
            CategoryKey::Transport => "transport",
        }
    }

    /// Parse a category key, ignoring surrounding whitespace and ASCII case.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "cooking" => Some(CategoryKey::Cooking),
            "food" => Some(CategoryKey::Food),
            "waste" => Some(CategoryKey::Waste),
            "clothing" => Some(CategoryKey::Clothing),
            "necessities" => Some(CategoryKey::Necessities),
            "transport" => Some(CategoryKey::Transport),
            _ => None,
        }
    }
}

impl FromStr for CategoryKey {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCategory(s.trim().to_string()))
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
