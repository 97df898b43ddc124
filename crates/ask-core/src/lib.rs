//! # ask-core
//!
//! Safe navigation of dynamically-typed trees: decoded JSON, parsed config
//! files, or any tree of mappings, sequences and scalars.
//!
//! A lookup takes a root and a path (`"a[0].b"`) or explicit segments, and
//! returns an [`Answer`]. Answers never fail: a malformed path, a missing key,
//! an index out of range, a step into the wrong shape and a null value all
//! produce an absent answer. Typed extractors then return `(value, true)` on
//! success and `(default, false)` otherwise.
//!
//! ## Quick start
//!
//! ```rust
//! use ask_core::{for_args, for_path, segments};
//! use serde_json::json;
//!
//! let config = json!({
//!     "servers": [{"host": "db1", "port": 5432}],
//!     "feature.flags": {"beta": true}
//! });
//!
//! assert_eq!(for_path(&config, "servers[0].port").int(0), (5432, true));
//! assert_eq!(for_path(&config, "servers[1].port").int(0), (0, false));
//!
//! // Keys containing '.' go through explicit segments.
//! let flags = for_args(&config, &segments!["feature.flags"]);
//! assert_eq!(flags.path("beta").bool(false), (true, true));
//! ```
//!
//! ## Modules
//!
//! - [`path`] — path grammar, [`Path`] and [`Segment`]
//! - [`node`] — the [`Node`] shape contract and its `serde_json::Value` impl
//! - [`value`] — crate-native [`Value`] tree with std adapters
//! - [`resolve`](mod@resolve) — the traversal engine
//! - [`answer`] — [`Answer`], [`for_path`], [`for_args`]
//! - [`extract`] — [`FromNode`] typed conversions
//! - [`error`] — [`PathError`] and [`Miss`]

pub mod answer;
pub mod error;
pub mod extract;
pub mod node;
pub mod path;
pub mod resolve;
pub mod value;

pub use answer::{for_args, for_path, Answer};
pub use error::{Miss, PathError};
pub use extract::FromNode;
pub use node::{Kind, Node};
pub use path::{Path, Segment};
pub use resolve::resolve;
pub use value::Value;
