//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. IDs are opaque
//! strings: catalog keys like `p1` and user keys like `user1`.

/// Errors that can occur when parsing an ID from client input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input string is empty or only whitespace.
    #[error("identifier cannot be empty")]
    Empty,
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `parse()`, `as_str()`
/// - `From<&str>`, `From<String>` and `Borrow<str>` implementations, so maps
///   keyed by the ID can be queried with a plain `&str`
///
/// # Example
///
/// ```rust
/// # use shopsense_core::define_id;
/// define_id!(WishlistId);
/// define_id!(SessionId);
///
/// let wishlist = WishlistId::new("w1");
/// let session = SessionId::new("w1");
///
/// // These are different types, so this won't compile:
/// // let _: WishlistId = session;
/// # let _ = (wishlist, session);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID without validation.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Parse an ID from client input, rejecting blank values.
            ///
            /// # Errors
            ///
            /// Returns [`IdError::Empty`] if the input is empty or whitespace.
            pub fn parse(s: &str) -> ::core::result::Result<Self, $crate::types::id::IdError> {
                if s.trim().is_empty() {
                    return Err($crate::types::id::IdError::Empty);
                }
                Ok(Self(s.to_owned()))
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId);
define_id!(ProductId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(UserId::parse(""), Err(IdError::Empty));
        assert_eq!(UserId::parse("   "), Err(IdError::Empty));
        assert_eq!(UserId::parse("user1").unwrap().as_str(), "user1");
    }

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(ProductId::new("p1"), 1);
        assert_eq!(map.get("p1"), Some(&1));
        assert_eq!(map.get("p2"), None);
    }

    #[test]
    fn test_serde_transparent() {
        let id: ProductId = serde_json::from_str("\"coffee1\"").unwrap();
        assert_eq!(id.as_str(), "coffee1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"coffee1\"");
    }
}
