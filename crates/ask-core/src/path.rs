//! Path expressions: `a[0].b`, `servers[2].ports[0]`, `[1].name`.
//!
//! A path is a `.`-separated list of steps. Each step is an identifier
//! (Unicode alphanumerics and `_`) followed by zero or more `[n]` index groups.
//! Only the first step may omit the identifier, so `[0].name` is valid while
//! `items.[0]` is not. The empty string is the empty path.
//!
//! Keys that the grammar cannot express (containing `.`, `-`, spaces, ...) are
//! reached through [`Segment`] slices instead, which are never re-parsed.

use crate::error::{PathError, Result};
use std::fmt;
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

/// One step of a resolved path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Look up a key in a mapping.
    Key(String),
    /// Select an element of a sequence. Negative indices never match.
    Index(i64),
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_owned())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<&String> for Segment {
    fn from(key: &String) -> Self {
        Segment::Key(key.clone())
    }
}

impl From<i64> for Segment {
    fn from(index: i64) -> Self {
        Segment::Index(index)
    }
}

impl From<i32> for Segment {
    fn from(index: i32) -> Self {
        Segment::Index(i64::from(index))
    }
}

impl From<u32> for Segment {
    fn from(index: u32) -> Self {
        Segment::Index(i64::from(index))
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        // Anything past i64::MAX is out of range for every sequence anyway.
        Segment::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Build a `Vec<Segment>` from a mix of keys and indices.
///
/// ```
/// use ask_core::{segments, Segment};
///
/// let segs = segments!["servers", 0, "host.name"];
/// assert_eq!(segs[1], Segment::Index(0));
/// assert_eq!(segs[2], Segment::Key("host.name".into()));
/// ```
#[macro_export]
macro_rules! segments {
    () => {
        ::std::vec::Vec::<$crate::Segment>::new()
    };
    ($($segment:expr),+ $(,)?) => {
        ::std::vec![$($crate::Segment::from($segment)),+]
    };
}

/// A parsed path: an ordered sequence of [`Segment`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The empty path, which resolves to the root itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a path expression.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] locating the first offending byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use ask_core::{Path, Segment};
    ///
    /// let path = Path::parse("a[0].b").unwrap();
    /// assert_eq!(
    ///     path.segments(),
    ///     &[Segment::Key("a".into()), Segment::Index(0), Segment::Key("b".into())]
    /// );
    /// assert!(Path::parse("---").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let mut segments = Vec::new();
        if input.is_empty() {
            return Ok(Self { segments });
        }

        let mut chars = input.char_indices().peekable();
        let mut head = true;

        loop {
            let start = chars.peek().map_or(input.len(), |&(i, _)| i);
            let mut end = start;
            while let Some(&(i, ch)) = chars.peek() {
                if !is_ident_char(ch) {
                    break;
                }
                end = i + ch.len_utf8();
                chars.next();
            }

            let has_key = end > start;
            if has_key {
                segments.push(Segment::Key(input[start..end].to_owned()));
            }

            let mut has_index = false;
            while let Some(&(open, '[')) = chars.peek() {
                chars.next();
                segments.push(Segment::Index(parse_index(input, open, &mut chars)?));
                has_index = true;
            }

            if !has_key && !has_index {
                return Err(match chars.peek() {
                    Some(&(position, ch)) if ch != '.' => PathError::UnexpectedChar {
                        path: input.to_owned(),
                        position,
                        ch,
                    },
                    _ => PathError::EmptyStep {
                        path: input.to_owned(),
                        position: start,
                    },
                });
            }
            if !has_key && !head {
                return Err(PathError::EmptyStep {
                    path: input.to_owned(),
                    position: start,
                });
            }
            head = false;

            match chars.next() {
                None => return Ok(Self { segments }),
                Some((_, '.')) => {}
                Some((position, ch)) => {
                    return Err(PathError::UnexpectedChar {
                        path: input.to_owned(),
                        position,
                        ch,
                    })
                }
            }
        }
    }

    /// The segments in traversal order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a segment, returning the extended path.
    pub fn join(mut self, segment: impl Into<Segment>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Parse the digits of an index group. `open` is the byte offset of the `[`,
/// which has already been consumed.
fn parse_index(input: &str, open: usize, chars: &mut Peekable<CharIndices<'_>>) -> Result<i64> {
    let digits_at = open + 1;
    let mut value: i64 = 0;
    let mut digits = 0_usize;

    loop {
        match chars.next() {
            Some((_, ']')) => break,
            Some((_, ch)) if ch.is_ascii_digit() => {
                let digit = i64::from(ch as u8 - b'0');
                value = value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit))
                    .ok_or_else(|| PathError::IndexOverflow {
                        path: input.to_owned(),
                        position: digits_at,
                    })?;
                digits += 1;
            }
            Some((position, _)) => {
                return Err(PathError::InvalidIndex {
                    path: input.to_owned(),
                    position,
                })
            }
            None => {
                return Err(PathError::UnclosedBracket {
                    path: input.to_owned(),
                    position: open,
                })
            }
        }
    }

    if digits == 0 {
        return Err(PathError::InvalidIndex {
            path: input.to_owned(),
            position: digits_at,
        });
    }
    Ok(value)
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    /// Renders the path back into expression syntax. Keys the grammar cannot
    /// express (empty, or containing anything but alphanumerics and `_`) are
    /// written as a quoted group such as `a["c.d"]`, which does not re-parse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if !is_expressible(key) => write!(f, "[{key:?}]")?,
                Segment::Key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

fn is_expressible(key: &str) -> bool {
    !key.is_empty() && key.chars().all(is_ident_char)
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[Segment]> for Path {
    fn as_ref(&self) -> &[Segment] {
        &self.segments
    }
}

