//! Error types for parsing and value access.
//!
//! Two families of failure exist:
//!
//! - [`ParseError`] - the input text is not a single well-formed JSON
//!   document. Carries a [`ParseErrorKind`] and the byte offset of the
//!   first offending character.
//! - [`ValueError`] - an accessor or indexing operation was applied to a
//!   [`Value`](crate::Value) of the wrong kind, or the key/index is absent.
//!
//! [`Error`] unifies both for callers that parse and navigate in one
//! `?` chain.

use thiserror::Error;

use crate::value::Kind;

/// The category of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseErrorKind {
    /// A value was expected but the lookahead cannot start one.
    #[error("unexpected character")]
    UnexpectedCharacter,

    /// `null`, `true` or `false` was misspelled or truncated.
    #[error("invalid literal")]
    InvalidLiteral,

    /// A number does not follow the JSON number grammar, or does not fit in
    /// a finite `f64`.
    #[error("invalid number")]
    InvalidNumber,

    /// Unknown escape character or malformed `\uXXXX` sequence.
    #[error("invalid escape sequence")]
    InvalidEscape,

    /// End of input reached before the closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// Something other than `,` or the closing bracket followed an element.
    #[error("expected ',' or closing bracket")]
    ExpectedCommaOrBracket,

    /// Missing `:` between an object key and its value.
    #[error("expected ':' after object key")]
    ExpectedColon,

    /// Object member does not start with a string key.
    #[error("expected string key")]
    ExpectedStringKey,

    /// Non-whitespace content follows the document.
    #[error("unexpected trailing input")]
    TrailingInput,

    /// Input ended where more content was required.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// Arrays/objects nested deeper than [`Limits::max_nesting_depth`](crate::Limits).
    #[error("maximum nesting depth exceeded")]
    MaxDepthExceeded,

    /// Input longer than [`Limits::max_input_size`](crate::Limits).
    #[error("input too large")]
    InputTooLarge,

    /// Byte input is not valid UTF-8.
    #[error("invalid UTF-8")]
    InvalidUtf8,
}

impl ParseErrorKind {
    /// Stable identifier for the kind, suitable for machine-readable output.
    pub fn name(&self) -> &'static str {
        match self {
            ParseErrorKind::UnexpectedCharacter => "UnexpectedCharacter",
            ParseErrorKind::InvalidLiteral => "InvalidLiteral",
            ParseErrorKind::InvalidNumber => "InvalidNumber",
            ParseErrorKind::InvalidEscape => "InvalidEscape",
            ParseErrorKind::UnterminatedString => "UnterminatedString",
            ParseErrorKind::ExpectedCommaOrBracket => "ExpectedCommaOrBracket",
            ParseErrorKind::ExpectedColon => "ExpectedColon",
            ParseErrorKind::ExpectedStringKey => "ExpectedStringKey",
            ParseErrorKind::TrailingInput => "TrailingInput",
            ParseErrorKind::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ParseErrorKind::MaxDepthExceeded => "MaxDepthExceeded",
            ParseErrorKind::InputTooLarge => "InputTooLarge",
            ParseErrorKind::InvalidUtf8 => "InvalidUtf8",
        }
    }
}

/// A positioned parse failure.
///
/// `offset` is a byte offset into the original input and is never larger
/// than the input length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("{kind} at position {offset}")]
pub struct ParseError {
    kind: ParseErrorKind,
    offset: usize,
}

impl ParseError {
    /// Create a parse error of `kind` at byte `offset`.
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The failure category.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Byte offset of the first offending character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Human-readable description without the position.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Failure of a typed accessor or lookup on a [`Value`](crate::Value).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ValueError {
    /// The value holds a different kind than the one requested.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Kind the caller asked for
        expected: Kind,
        /// Kind actually held
        found: Kind,
    },

    /// Read-only object lookup of an absent key.
    #[error("key not found: {0:?}")]
    KeyNotFound(String),

    /// Array position past the end.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Array length at the time of the lookup
        len: usize,
    },
}

/// Either a parse or an access failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// See [`ParseError`].
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// See [`ValueError`].
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// Result of a parse.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result of a value access.
pub type ValueResult<T> = std::result::Result<T, ValueError>;

/// Result carrying the umbrella [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
