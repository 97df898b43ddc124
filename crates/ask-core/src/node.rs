//! The shape contract a tree must satisfy to be navigated.
//!
//! Traversal and extraction never match on concrete container types. They ask a
//! node for its [`Kind`] and, for containers, for a member, an element, or an
//! iterator over its contents. Any tree type that can answer those questions is
//! navigated exactly like `serde_json::Value`.

use serde_json::Value as JsonValue;

/// Borrowed iterator over the elements of a sequence node.
pub type Elements<'a, N> = Box<dyn ExactSizeIterator<Item = &'a N> + 'a>;

/// Borrowed iterator over the entries of a mapping node.
pub type Entries<'a, N> = Box<dyn Iterator<Item = (&'a str, &'a N)> + 'a>;

/// Runtime kind of a tree node, as seen by traversal and extraction.
///
/// Scalars carry their payload. Containers are only tagged; their contents are
/// reached through [`Node`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(&'a str),
    Sequence,
    Mapping,
}

impl Kind<'_> {
    /// Short lowercase name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool(_) => "bool",
            Kind::Int(_) => "int",
            Kind::Uint(_) => "uint",
            Kind::Float(_) => "float",
            Kind::Text(_) => "text",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
        }
    }
}

/// A node of a dynamically-typed tree.
///
/// `member` must return `None` for non-mappings and `element` must return
/// `None` for non-sequences; `elements` and `entries` return `None` when the
/// node is not of the matching shape.
pub trait Node: Sized {
    fn kind(&self) -> Kind<'_>;

    /// Value stored under `key`, if this node is a mapping containing it.
    fn member(&self, key: &str) -> Option<&Self>;

    /// Element at `index`, if this node is a sequence long enough.
    fn element(&self, index: usize) -> Option<&Self>;

    fn elements(&self) -> Option<Elements<'_, Self>>;

    fn entries(&self) -> Option<Entries<'_, Self>>;

    fn is_null(&self) -> bool {
        matches!(self.kind(), Kind::Null)
    }

    fn is_sequence(&self) -> bool {
        matches!(self.kind(), Kind::Sequence)
    }

    fn is_mapping(&self) -> bool {
        matches!(self.kind(), Kind::Mapping)
    }
}

impl Node for JsonValue {
    fn kind(&self) -> Kind<'_> {
        match self {
            JsonValue::Null => Kind::Null,
            JsonValue::Bool(b) => Kind::Bool(*b),
            JsonValue::Number(n) => {
                // Positive integers come back as u64, negative ones as i64.
                if let Some(u) = n.as_u64() {
                    Kind::Uint(u)
                } else if let Some(i) = n.as_i64() {
                    Kind::Int(i)
                } else {
                    Kind::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => Kind::Text(s),
            JsonValue::Array(_) => Kind::Sequence,
            JsonValue::Object(_) => Kind::Mapping,
        }
    }

    fn member(&self, key: &str) -> Option<&Self> {
        match self {
            JsonValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    fn element(&self, index: usize) -> Option<&Self> {
        match self {
            JsonValue::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    fn elements(&self) -> Option<Elements<'_, Self>> {
        match self {
            JsonValue::Array(arr) => Some(Box::new(arr.iter())),
            _ => None,
        }
    }

    fn entries(&self) -> Option<Entries<'_, Self>> {
        match self {
            JsonValue::Object(map) => Some(Box::new(map.iter().map(|(k, v)| (k.as_str(), v)))),
            _ => None,
        }
    }
}
