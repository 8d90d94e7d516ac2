//! # Identifier Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the KitchenHub
//! client stack. Each identifier is a distinct type - you cannot pass a
//! [`UserId`] where a [`RecipeId`] is expected.
//!
//! ## Wire format
//!
//! The backend serializes numeric ids as JSON Long values, but has been
//! observed emitting them as numeric strings on some endpoints. The
//! numeric newtypes therefore deserialize from either form and always
//! serialize as numbers. [`MemberId`] is generated locally (family
//! members never round-trip through the backend) and is a UUID.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Numeric identifiers (backend-assigned, JSON number or numeric string)
// ---------------------------------------------------------------------------

struct FlexibleI64Visitor;

impl Visitor<'_> for FlexibleI64Visitor {
    type Value = i64;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("an integer or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::custom(format!("id out of range: {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.parse()
            .map_err(|_| E::custom(format!("id is not numeric: {v:?}")))
    }
}

fn flexible_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    deserializer.deserialize_any(FlexibleI64Visitor)
}

macro_rules! numeric_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw backend identifier.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Access the underlying integer.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                flexible_i64(deserializer).map(Self)
            }
        }
    };
}

numeric_id! {
    /// A unique identifier for a registered user account.
    UserId
}

numeric_id! {
    /// A unique identifier for a recipe.
    RecipeId
}

numeric_id! {
    /// A unique identifier for a comment on a recipe.
    CommentId
}

numeric_id! {
    /// A unique identifier for a fridge inventory item.
    ItemId
}

// ---------------------------------------------------------------------------
// UUID-based identifiers (always valid by construction)
// ---------------------------------------------------------------------------

/// A unique identifier for a family member in the local roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(Uuid);

impl MemberId {
    /// Create a new random member identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a member identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
