use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EmptyStringError, NonEmptyString};

/// Identifier stamped on a finished entry by an id generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(NonEmptyString);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Result<Self, EmptyStringError> {
        NonEmptyString::new(id).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of the user an entry belongs to.
///
/// Supplied by the authentication collaborator. When no user is signed in the
/// caller falls back to [`OwnerId::placeholder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(NonEmptyString);

impl OwnerId {
    pub const PLACEHOLDER: &'static str = "mock-user-id";

    pub fn new(id: impl Into<String>) -> Result<Self, EmptyStringError> {
        NonEmptyString::new(id).map(Self)
    }

    #[must_use]
    pub fn placeholder() -> Self {
        Self(NonEmptyString::new(Self::PLACEHOLDER).expect("placeholder owner id is non-empty"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
