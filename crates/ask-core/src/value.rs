//! Crate-native tree value.
//!
//! Most callers navigate a `serde_json::Value` straight out of the decoder. This
//! type exists for trees built in Rust: it keeps signed, unsigned and float
//! numbers apart (so `u64::MAX` survives intact) and has `From` adapters for
//! the usual std containers and scalars.

use crate::node::{Elements, Entries, Kind, Node};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// A dynamically-typed tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs; lookup order is irrelevant so keys are kept sorted.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Build a tree from any serializable type, going through `serde_json`.
    ///
    /// # Errors
    ///
    /// Fails if `T`'s `Serialize` impl fails or produces a map with non-string keys.
    pub fn from_serialize<T: Serialize>(value: &T) -> serde_json::Result<Self> {
        Ok(serde_json::to_value(value)?.into())
    }
}

impl Node for Value {
    fn kind(&self) -> Kind<'_> {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(b) => Kind::Bool(*b),
            Value::Int(i) => Kind::Int(*i),
            Value::Uint(u) => Kind::Uint(*u),
            Value::Float(f) => Kind::Float(*f),
            Value::String(s) => Kind::Text(s),
            Value::Array(_) => Kind::Sequence,
            Value::Object(_) => Kind::Mapping,
        }
    }

    fn member(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    fn element(&self, index: usize) -> Option<&Self> {
        match self {
            Value::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    fn elements(&self) -> Option<Elements<'_, Self>> {
        match self {
            Value::Array(arr) => Some(Box::new(arr.iter())),
            _ => None,
        }
    }

    fn entries(&self) -> Option<Entries<'_, Self>> {
        match self {
            Value::Object(map) => Some(Box::new(map.iter().map(|(k, v)| (k.as_str(), v)))),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

macro_rules! from_scalar {
    ($variant:ident: $target:ty => $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(v: $source) -> Self {
                    Value::$variant(<$target>::from(v))
                }
            }
        )+
    };
}

from_scalar!(Int: i64 => i8, i16, i32, i64);
from_scalar!(Uint: u64 => u8, u16, u32, u64);
from_scalar!(Float: f64 => f32, f64);
from_scalar!(Bool: bool => bool);
from_scalar!(String: String => String, &str);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        // isize is at most 64 bits on every supported target.
        Value::Int(v as i64)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Uint(v as u64)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(v: BTreeMap<String, T>) -> Self {
        Value::Object(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Value>> From<HashMap<String, T>> for Value {
    fn from(v: HashMap<String, T>) -> Self {
        Value::Object(v.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
