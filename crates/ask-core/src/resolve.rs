//! Traversal engine: walk a tree one [`Segment`] at a time.
//!
//! Keys apply to mapping-shaped nodes and indices to sequence-shaped nodes; any
//! other combination stops the walk. Shapes are tested through [`Node`], never
//! by concrete type, so every tree implementation resolves identically.

use crate::error::Miss;
use crate::node::Node;
use crate::path::Segment;

/// Resolve `segments` against `root`.
///
/// An empty key is a no-op step. A walk that ends on a null node is reported
/// as [`Miss::Null`], so null and missing look the same to callers.
///
/// # Errors
///
/// Returns the [`Miss`] for the first segment that could not be applied.
///
/// # Examples
///
/// ```
/// use ask_core::{resolve, segments, Miss};
/// use serde_json::json;
///
/// let tree = json!({"a": [{"b": 100}]});
/// assert_eq!(resolve(&tree, &segments!["a", 0, "b"]), Ok(&json!(100)));
/// assert_eq!(
///     resolve(&tree, &segments!["a", 1]),
///     Err(Miss::IndexOutOfRange { index: 1, len: 1, at: 1 })
/// );
/// ```
pub fn resolve<'a, N: Node>(root: &'a N, segments: &[Segment]) -> Result<&'a N, Miss> {
    let mut current = root;

    for (at, segment) in segments.iter().enumerate() {
        current = match segment {
            Segment::Key(key) if key.is_empty() => current,
            Segment::Key(key) => step_key(current, key, at)?,
            Segment::Index(index) => step_index(current, *index, at)?,
        };
    }

    if current.is_null() {
        log::trace!("path resolved to null after {} segments", segments.len());
        return Err(Miss::Null);
    }
    Ok(current)
}

fn step_key<'a, N: Node>(current: &'a N, key: &str, at: usize) -> Result<&'a N, Miss> {
    if !current.is_mapping() {
        log::trace!("segment {at}: key {key:?} applied to {}", current.kind().name());
        return Err(Miss::NotAMapping {
            key: key.to_owned(),
            at,
        });
    }
    current.member(key).ok_or_else(|| {
        log::trace!("segment {at}: key {key:?} not found");
        Miss::MissingKey {
            key: key.to_owned(),
            at,
        }
    })
}

fn step_index<'a, N: Node>(current: &'a N, index: i64, at: usize) -> Result<&'a N, Miss> {
    if let Some(found) = usize::try_from(index).ok().and_then(|i| current.element(i)) {
        return Ok(found);
    }

    // Only a miss needs the length, for the diagnostic.
    let Some(len) = current.elements().map(|elements| elements.len()) else {
        log::trace!("segment {at}: index {index} applied to {}", current.kind().name());
        return Err(Miss::NotASequence { index, at });
    };
    log::trace!("segment {at}: index {index} out of range (len {len})");
    Err(Miss::IndexOutOfRange { index, len, at })
}
