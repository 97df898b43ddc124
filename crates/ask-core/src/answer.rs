//! The result of a lookup, and the API for navigating further from it.

use crate::error::Miss;
use crate::extract::FromNode;
use crate::node::{Kind, Node};
use crate::path::{Path, Segment};
use crate::resolve::resolve;
use std::fmt;

/// Look up `path` in `root`.
///
/// Never fails: a malformed path, a missing key, an out-of-range index and a
/// null value all produce an absent [`Answer`].
///
/// # Examples
///
/// ```
/// use ask_core::for_path;
/// use serde_json::json;
///
/// let tree = json!({"a": [{"b": {"c": 3}}]});
/// assert_eq!(for_path(&tree, "a[0].b.c").int(0), (3, true));
/// assert_eq!(
///     for_path(&tree, "a[0].b.d").string("nothing"),
///     ("nothing".to_string(), false)
/// );
/// ```
pub fn for_path<'a, N: Node>(root: &'a N, path: &str) -> Answer<'a, N> {
    Answer::new(root).path(path)
}

/// Look up an explicit segment sequence in `root`. Keys are used verbatim, so
/// keys containing `.` or other path syntax are reachable.
///
/// ```
/// use ask_core::{for_args, segments};
/// use serde_json::json;
///
/// let tree = json!({"c.d": true});
/// assert_eq!(for_args(&tree, &segments!["c.d"]).bool(false), (true, true));
/// ```
pub fn for_args<'a, N: Node>(root: &'a N, segments: &[Segment]) -> Answer<'a, N> {
    Answer::new(root).path_args(segments)
}

/// An immutable lookup result: either a borrowed node or an absence with the
/// [`Miss`] that caused it.
///
/// Navigation methods return a new `Answer`; an absent answer stays absent and
/// keeps its original miss no matter how far the chain continues.
pub struct Answer<'a, N> {
    value: Option<&'a N>,
    miss: Option<Miss>,
}

impl<'a, N: Node> Answer<'a, N> {
    /// A present answer over `root`, or an absent one if `root` is null.
    pub fn new(root: &'a N) -> Self {
        if root.is_null() {
            return Self::absent(Miss::Null);
        }
        Self {
            value: Some(root),
            miss: None,
        }
    }

    fn absent(miss: Miss) -> Self {
        Self {
            value: None,
            miss: Some(miss),
        }
    }

    fn from_resolved(resolved: Result<&'a N, Miss>) -> Self {
        match resolved {
            Ok(value) => Self {
                value: Some(value),
                miss: None,
            },
            Err(miss) => Self::absent(miss),
        }
    }

    /// Navigate `path` relative to this answer. The empty path returns an
    /// equal answer.
    pub fn path(&self, path: &str) -> Self {
        let Some(current) = self.value else {
            return self.clone();
        };
        if path.is_empty() {
            return self.clone();
        }
        match Path::parse(path) {
            Ok(parsed) => Self::from_resolved(resolve(current, parsed.segments())),
            Err(err) => {
                log::trace!("{err}");
                Self::absent(err.into())
            }
        }
    }

    /// Navigate explicit segments relative to this answer.
    pub fn path_args(&self, segments: &[Segment]) -> Self {
        match self.value {
            Some(current) => Self::from_resolved(resolve(current, segments)),
            None => self.clone(),
        }
    }

    pub fn exists(&self) -> bool {
        self.value.is_some()
    }

    /// The found node, borrowed from the original tree.
    pub fn value(&self) -> Option<&'a N> {
        self.value
    }

    /// Why this answer is absent; `None` when it is present.
    pub fn miss(&self) -> Option<&Miss> {
        self.miss.as_ref()
    }

    /// Extract any [`FromNode`] type, falling back to `default`.
    ///
    /// The flag is `true` only when the value was found and converted.
    ///
    /// ```
    /// use ask_core::for_path;
    /// use serde_json::json;
    ///
    /// let tree = json!({"port": 8080, "big": u64::MAX});
    /// assert_eq!(for_path(&tree, "port").get(0u16), (8080, true));
    /// assert_eq!(for_path(&tree, "big").get(7u32), (7, false));
    /// ```
    pub fn get<T: FromNode>(&self, default: T) -> (T, bool) {
        match self.value.and_then(T::from_node) {
            Some(value) => (value, true),
            None => (default, false),
        }
    }

    /// Text value. Numbers and booleans are not stringified.
    pub fn string(&self, default: impl Into<String>) -> (String, bool) {
        self.get(default.into())
    }

    /// Text value borrowed from the tree.
    pub fn str(&self, default: &'a str) -> (&'a str, bool) {
        match self.value.map(Node::kind) {
            Some(Kind::Text(s)) => (s, true),
            _ => (default, false),
        }
    }

    pub fn bool(&self, default: bool) -> (bool, bool) {
        self.get(default)
    }

    /// Signed integer. Unsigned values must fit; floats are truncated toward
    /// zero and must fit.
    pub fn int(&self, default: i64) -> (i64, bool) {
        self.get(default)
    }

    /// Unsigned integer. Any negative input fails.
    pub fn uint(&self, default: u64) -> (u64, bool) {
        self.get(default)
    }

    pub fn float(&self, default: f64) -> (f64, bool) {
        self.get(default)
    }

    /// Copy a sequence into a new container of the default's type.
    ///
    /// ```
    /// use ask_core::for_path;
    /// use serde_json::{json, Value};
    /// use std::collections::VecDeque;
    ///
    /// let tree = json!({"xs": [1, 2, 3]});
    /// let (xs, ok) = for_path(&tree, "xs").slice(VecDeque::<Value>::new());
    /// assert!(ok);
    /// assert_eq!(xs.len(), 3);
    /// ```
    pub fn slice<C>(&self, default: C) -> (C, bool)
    where
        C: FromIterator<N>,
        N: Clone,
    {
        match self.value.and_then(Node::elements) {
            Some(elements) => (elements.cloned().collect(), true),
            None => (default, false),
        }
    }

    /// Copy a mapping into a new container of the default's type.
    pub fn map<C>(&self, default: C) -> (C, bool)
    where
        C: FromIterator<(String, N)>,
        N: Clone,
    {
        match self.value.and_then(Node::entries) {
            Some(entries) => (
                entries.map(|(k, v)| (k.to_owned(), v.clone())).collect(),
                true,
            ),
            None => (default, false),
        }
    }
}

impl<N> Clone for Answer<'_, N> {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            miss: self.miss.clone(),
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for Answer<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Answer")
            .field("value", &self.value)
            .field("miss", &self.miss)
            .finish()
    }
}

impl<N: PartialEq> PartialEq for Answer<'_, N> {
    /// Answers are equal when they hold equal values; absent answers are equal
    /// regardless of their miss.
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
