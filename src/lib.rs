//! jsontree - a JSON value tree with a parser and a serializer.
//!
//! Converts between JSON text and an owned, in-memory tree of typed
//! [`Value`]s, and back.
//!
//! # Architecture
//!
//! - [`value`] - the tagged value type, typed accessors and indexing
//! - [`limits`] - nesting depth and input size caps
//! - [`lexer`] - byte cursor reading literals, strings and numbers
//! - [`parser`] - recursive descent parser with positioned errors
//! - [`serializer`] - compact and pretty-printed output
//! - [`error`] - parse and access error types
//!
//! # Example
//!
//! ```
//! use jsontree::{parse, stringify, Value};
//!
//! let mut doc = parse(r#"{"name": "Ada", "tags": ["x", "y"], "n": 3.5}"#).unwrap();
//! assert_eq!(doc.get("name").and_then(Value::as_str), Ok("Ada"));
//!
//! doc["n"] = Value::from(4);
//! assert_eq!(stringify(&doc, false), r#"{"n":4,"name":"Ada","tags":["x","y"]}"#);
//! ```
//!
//! # Ordering
//!
//! Object members are kept sorted by key, so output does not depend on the
//! order in which members were parsed or inserted.

// Library code reports every failure as a value; the only panics are the
// documented `Index` operators.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod lexer;
pub mod limits;
pub mod parser;
pub mod serializer;
pub mod value;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-export commonly used types
pub use error::{
    Error, ParseError, ParseErrorKind, ParseResult, Result, ValueError, ValueResult,
};
pub use limits::Limits;
pub use parser::{parse, parse_slice, parse_slice_with_limits, parse_with_limits};
pub use serializer::{stringify, to_string_compact, to_string_pretty};
pub use value::{Array, Kind, Object, Value};
