//! Typed extraction: converting a tree node into a concrete Rust value.
//!
//! Conversions are shape- and range-aware and never panic:
//!
//! - text and booleans only convert from their own kind;
//! - integer targets accept any integer that fits and any finite float whose
//!   value truncated toward zero fits; unsigned targets reject every negative
//!   input, including negative floats that would truncate to zero;
//! - float targets accept any number, narrowing to `f32` only when the result
//!   stays finite;
//! - `Vec`, `BTreeMap` and `HashMap` convert element by element and fail as a
//!   whole if any element fails.

use crate::node::{Kind, Node};
use crate::value::Value;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Types that can be extracted from a tree node.
pub trait FromNode: Sized {
    /// Convert `node`, or `None` if its kind or range does not fit `Self`.
    fn from_node<N: Node>(node: &N) -> Option<Self>;
}

impl FromNode for bool {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        match node.kind() {
            Kind::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl FromNode for String {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        match node.kind() {
            Kind::Text(s) => Some(s.to_owned()),
            _ => None,
        }
    }
}

/// 2^127, the first float magnitude outside `i128`.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Integral value of a numeric kind. Floats are truncated toward zero.
fn integral(kind: Kind<'_>) -> Option<i128> {
    match kind {
        Kind::Int(i) => Some(i128::from(i)),
        Kind::Uint(u) => Some(i128::from(u)),
        Kind::Float(f) if f.is_finite() => {
            let t = f.trunc();
            (-I128_BOUND..I128_BOUND).contains(&t).then(|| t as i128)
        }
        _ => None,
    }
}

macro_rules! from_node_signed {
    ($($t:ty),+) => {
        $(
            impl FromNode for $t {
                fn from_node<N: Node>(node: &N) -> Option<Self> {
                    integral(node.kind()).and_then(|v| <$t>::try_from(v).ok())
                }
            }
        )+
    };
}

macro_rules! from_node_unsigned {
    ($($t:ty),+) => {
        $(
            impl FromNode for $t {
                fn from_node<N: Node>(node: &N) -> Option<Self> {
                    match node.kind() {
                        Kind::Float(f) if f < 0.0 => None,
                        kind => integral(kind).and_then(|v| <$t>::try_from(v).ok()),
                    }
                }
            }
        )+
    };
}

from_node_signed!(i8, i16, i32, i64, i128, isize);
from_node_unsigned!(u8, u16, u32, u64, u128, usize);

impl FromNode for f64 {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        match node.kind() {
            Kind::Int(i) => Some(i as f64),
            Kind::Uint(u) => Some(u as f64),
            Kind::Float(f) => Some(f),
            _ => None,
        }
    }
}

impl FromNode for f32 {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        let wide = f64::from_node(node)?;
        let narrow = wide as f32;
        if wide.is_finite() && narrow.is_infinite() {
            return None;
        }
        Some(narrow)
    }
}

impl<T: FromNode> FromNode for Vec<T> {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        node.elements()?.map(T::from_node).collect()
    }
}

impl<T: FromNode> FromNode for BTreeMap<String, T> {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        node.entries()?
            .map(|(k, v)| T::from_node(v).map(|v| (k.to_owned(), v)))
            .collect()
    }
}

impl<T: FromNode, S: BuildHasher + Default> FromNode for HashMap<String, T, S> {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        node.entries()?
            .map(|(k, v)| T::from_node(v).map(|v| (k.to_owned(), v)))
            .collect()
    }
}

/// Deep copy of any tree into the crate-native representation.
impl FromNode for Value {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        Some(match node.kind() {
            Kind::Null => Value::Null,
            Kind::Bool(b) => Value::Bool(b),
            Kind::Int(i) => Value::Int(i),
            Kind::Uint(u) => Value::Uint(u),
            Kind::Float(f) => Value::Float(f),
            Kind::Text(s) => Value::String(s.to_owned()),
            Kind::Sequence => Value::Array(Vec::from_node(node)?),
            Kind::Mapping => Value::Object(BTreeMap::from_node(node)?),
        })
    }
}

/// Deep copy of any tree into JSON. Fails on non-finite floats, which JSON
/// cannot represent.
impl FromNode for serde_json::Value {
    fn from_node<N: Node>(node: &N) -> Option<Self> {
        Some(match node.kind() {
            Kind::Null => serde_json::Value::Null,
            Kind::Bool(b) => serde_json::Value::Bool(b),
            Kind::Int(i) => serde_json::Value::from(i),
            Kind::Uint(u) => serde_json::Value::from(u),
            Kind::Float(f) => serde_json::Value::Number(serde_json::Number::from_f64(f)?),
            Kind::Text(s) => serde_json::Value::String(s.to_owned()),
            Kind::Sequence => serde_json::Value::Array(Vec::from_node(node)?),
            Kind::Mapping => serde_json::Value::Object(
                node.entries()?
                    .map(|(k, v)| Self::from_node(v).map(|v| (k.to_owned(), v)))
                    .collect::<Option<_>>()?,
            ),
        })
    }
}
