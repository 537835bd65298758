use lasso::{Spur, ThreadedRodeo};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner shared by junction and trail identifiers.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// Network data files use either strings or integers as ids.
/// Integers are interned by their decimal form.
struct IdVisitor;

impl Visitor<'_> for IdVisitor {
    type Value = Spur;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or integer identifier")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Spur, E> {
        Ok(INTERNER.get_or_intern(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Spur, E> {
        Ok(INTERNER.get_or_intern(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Spur, E> {
        Ok(INTERNER.get_or_intern(v.to_string()))
    }
}

macro_rules! interned_id {
    ($(#[$meta:meta])* $name:ident, $sigil:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Spur);

        impl $name {
            /// Intern a string as an id, or return the existing one.
            pub fn intern(s: &str) -> Self {
                Self(INTERNER.get_or_intern(s))
            }

            /// Resolve back to a string slice.
            pub fn as_str(&self) -> &'static str {
                INTERNER.resolve(&self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($sigil, "{}"), self.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_any(IdVisitor).map(Self)
            }
        }
    };
}

interned_id!(
    /// Identifier of a junction (graph node). 4 bytes, Copy, O(1) Eq/Hash.
    NodeId,
    "#"
);

interned_id!(
    /// Identifier of a trail (graph edge).
    EdgeId,
    "~"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_roundtrip() {
        let a = EdgeId::intern("summit_loop");
        let b = EdgeId::intern("summit_loop");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "summit_loop");
    }

    #[test]
    fn integer_ids_intern_as_decimal() {
        let id: NodeId = serde_json::from_str("42").unwrap();
        assert_eq!(id, NodeId::intern("42"));
        let id: NodeId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(id, NodeId::intern("42"));
    }

    #[test]
    fn rejects_non_scalar_ids() {
        assert!(serde_json::from_str::<EdgeId>("[1]").is_err());
    }
}
