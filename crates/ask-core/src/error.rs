//! Error types for path parsing and lookup diagnostics.
//!
//! None of these ever escape the lookup API as an `Err`: an [`Answer`](crate::Answer)
//! that is absent carries a [`Miss`] describing the first step that failed, and
//! [`Path::parse`](crate::Path::parse) returns [`PathError`] for callers who want
//! strict parsing.

use thiserror::Error;

/// Syntax errors in a path expression such as `a[0].b`.
///
/// Every variant carries the full input and the byte offset where parsing stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A character outside the identifier / bracket / dot set.
    #[error("unexpected character {ch:?} at byte {position} in path {path:?}")]
    UnexpectedChar {
        path: String,
        position: usize,
        ch: char,
    },

    /// A step with neither a key nor an index, e.g. `a..b` or `a.`.
    #[error("empty step at byte {position} in path {path:?}")]
    EmptyStep { path: String, position: usize },

    /// Bracket content that is not a non-empty run of decimal digits.
    #[error("invalid index at byte {position} in path {path:?}")]
    InvalidIndex { path: String, position: usize },

    /// A `[` without a matching `]`.
    #[error("unclosed bracket at byte {position} in path {path:?}")]
    UnclosedBracket { path: String, position: usize },

    /// Index digits that do not fit a signed 64-bit integer.
    #[error("index out of range at byte {position} in path {path:?}")]
    IndexOverflow { path: String, position: usize },
}

impl PathError {
    /// Byte offset in the input where the error was detected.
    pub fn position(&self) -> usize {
        match self {
            PathError::UnexpectedChar { position, .. }
            | PathError::EmptyStep { position, .. }
            | PathError::InvalidIndex { position, .. }
            | PathError::UnclosedBracket { position, .. }
            | PathError::IndexOverflow { position, .. } => *position,
        }
    }
}

/// Why a lookup produced an absent [`Answer`](crate::Answer).
///
/// `at` is the zero-based position of the failing segment, relative to the
/// segment sequence of the call that failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Miss {
    /// The path string did not parse.
    #[error(transparent)]
    InvalidPath(#[from] PathError),

    /// A mapping was reached but it has no such key.
    #[error("key {key:?} not found (segment {at})")]
    MissingKey { key: String, at: usize },

    /// A key was applied to a node that is not a mapping.
    #[error("cannot look up key {key:?} in a non-mapping value (segment {at})")]
    NotAMapping { key: String, at: usize },

    /// A sequence was reached but the index is negative or past its end.
    #[error("index {index} out of range for sequence of length {len} (segment {at})")]
    IndexOutOfRange { index: i64, len: usize, at: usize },

    /// An index was applied to a node that is not a sequence.
    #[error("cannot index {index} into a non-sequence value (segment {at})")]
    NotASequence { index: i64, at: usize },

    /// The path resolved, but to a null value.
    #[error("value is null")]
    Null,
}

/// Convenience alias used by the strict parsing API.
pub type Result<T> = std::result::Result<T, PathError>;
