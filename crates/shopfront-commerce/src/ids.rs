//! Newtype IDs for type-safe identifiers.
//!
//! The backend uses integer primary keys throughout, so every ID wraps an
//! `i64`. Newtypes prevent accidentally mixing up different ID kinds,
//! e.g. passing a `ProductId` where a `VariationValueId` is expected.
//! IDs are always minted by the backend; the client only carries them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier assigned by the backend.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an ID from its raw value.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(ProductId);
define_id!(VariationId);
define_id!(VariationValueId);
define_id!(ImageId);
define_id!(CatalogId);
define_id!(CartItemId);
define_id!(OrderId);
define_id!(OrderItemId);
define_id!(ReviewId);
define_id!(UserId);
