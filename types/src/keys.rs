//! Item and unit keys.
//!
//! Keys are only unique within their category, so a bare key is a weak
//! reference: whether it names anything has to be checked against the catalog
//! together with the category it is paired with.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! category_scoped_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            /// Key backed by a compiled-in string.
            #[must_use]
            pub const fn from_static(key: &'static str) -> Self {
                Self(Cow::Borrowed(key))
            }

            /// Key from runtime input. Surrounding whitespace is trimmed.
            #[must_use]
            pub fn new(key: impl AsRef<str>) -> Self {
                Self(Cow::Owned(key.as_ref().trim().to_string()))
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_ref()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

category_scoped_key!(
    /// Key of an item option, e.g. `charcoal`.
    ItemKey
);

category_scoped_key!(
    /// Key of a unit option, e.g. `kg_fuel`.
    UnitKey
);
