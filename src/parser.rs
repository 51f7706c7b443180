//! Recursive descent JSON parser.
//!
//! One routine per production, dispatching on a single byte of lookahead.
//! The first lexical or structural violation aborts the parse with a
//! [`ParseError`] positioned at the offending byte; there is no recovery
//! and no partial result.
//!
//! Nesting depth is bounded by [`Limits::max_nesting_depth`]. Duplicate
//! object keys are accepted and the last occurrence wins.

use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::lexer::Lexer;
use crate::limits::Limits;
use crate::value::{Array, Object, Value};

/// JSON parser over a complete document.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    limits: Limits,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a str, limits: Limits) -> ParseResult<Self> {
        let lexer = Lexer::new(input, &limits)?;
        Ok(Self {
            lexer,
            limits,
            depth: 0,
        })
    }

    /// Parse exactly one document surrounded by optional whitespace.
    pub fn parse(&mut self) -> ParseResult<Value> {
        self.lexer.skip_whitespace();
        let value = self.parse_value()?;
        self.lexer.skip_whitespace();

        // Ensure no trailing content
        if self.lexer.peek().is_some() {
            return Err(self.lexer.error(ParseErrorKind::TrailingInput));
        }

        Ok(value)
    }

    /// Parse a single JSON value at the current position.
    fn parse_value(&mut self) -> ParseResult<Value> {
        match self.lexer.peek() {
            None => Err(self.lexer.error(ParseErrorKind::UnexpectedEndOfInput)),
            Some(b'n') => {
                self.lexer.expect_literal(b"null")?;
                Ok(Value::Null)
            }
            Some(b't') => {
                self.lexer.expect_literal(b"true")?;
                Ok(Value::Bool(true))
            }
            Some(b'f') => {
                self.lexer.expect_literal(b"false")?;
                Ok(Value::Bool(false))
            }
            Some(b'"') => self.lexer.read_string().map(Value::String),
            Some(b'-' | b'0'..=b'9') => self.lexer.read_number().map(Value::Number),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => Err(self.lexer.error(ParseErrorKind::UnexpectedCharacter)),
        }
    }

    /// Enter an array/object, enforcing the depth limit at its opening
    /// bracket.
    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.limits.max_nesting_depth {
            return Err(self.lexer.error(ParseErrorKind::MaxDepthExceeded));
        }
        self.lexer.advance();
        self.lexer.skip_whitespace();
        Ok(())
    }

    /// Error for a missing `,` or closing bracket, distinguishing end of
    /// input.
    fn expected_separator(&self) -> ParseError {
        match self.lexer.peek() {
            None => self.lexer.error(ParseErrorKind::UnexpectedEndOfInput),
            Some(_) => self.lexer.error(ParseErrorKind::ExpectedCommaOrBracket),
        }
    }

    /// Parse a JSON array.
    fn parse_array(&mut self) -> ParseResult<Value> {
        self.enter()?;

        let mut arr = Array::new();

        // Empty array
        if self.lexer.peek() == Some(b']') {
            self.lexer.advance();
            self.depth -= 1;
            return Ok(Value::Array(arr));
        }

        loop {
            arr.push(self.parse_value()?);
            self.lexer.skip_whitespace();

            // Expect comma or closing bracket
            match self.lexer.peek() {
                Some(b',') => {
                    self.lexer.advance();
                    self.lexer.skip_whitespace();
                    // Trailing comma is not allowed in JSON
                    if self.lexer.peek() == Some(b']') {
                        return Err(self.lexer.error(ParseErrorKind::ExpectedCommaOrBracket));
                    }
                }
                Some(b']') => {
                    self.lexer.advance();
                    break;
                }
                _ => return Err(self.expected_separator()),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(arr))
    }

    /// Parse a JSON object.
    fn parse_object(&mut self) -> ParseResult<Value> {
        self.enter()?;

        let mut map = Object::new();

        // Empty object
        if self.lexer.peek() == Some(b'}') {
            self.lexer.advance();
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            // Expect string key
            let key = match self.lexer.peek() {
                Some(b'"') => self.lexer.read_string()?,
                None => return Err(self.lexer.error(ParseErrorKind::UnexpectedEndOfInput)),
                Some(_) => return Err(self.lexer.error(ParseErrorKind::ExpectedStringKey)),
            };
            self.lexer.skip_whitespace();

            // Expect colon
            match self.lexer.peek() {
                Some(b':') => {
                    self.lexer.advance();
                }
                None => return Err(self.lexer.error(ParseErrorKind::UnexpectedEndOfInput)),
                Some(_) => return Err(self.lexer.error(ParseErrorKind::ExpectedColon)),
            }
            self.lexer.skip_whitespace();

            // Last occurrence of a duplicate key wins
            let value = self.parse_value()?;
            map.insert(key, value);
            self.lexer.skip_whitespace();

            // Expect comma or closing brace
            match self.lexer.peek() {
                Some(b',') => {
                    self.lexer.advance();
                    self.lexer.skip_whitespace();
                }
                Some(b'}') => {
                    self.lexer.advance();
                    break;
                }
                _ => return Err(self.expected_separator()),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }
}

/// Parse a JSON document with default limits.
pub fn parse(input: &str) -> ParseResult<Value> {
    parse_with_limits(input, Limits::default())
}

/// Parse a JSON document with custom limits.
pub fn parse_with_limits(input: &str, limits: Limits) -> ParseResult<Value> {
    let mut parser = Parser::new(input, limits)?;
    parser.parse()
}

/// Parse a JSON document from raw bytes, rejecting invalid UTF-8 at the
/// first bad byte.
pub fn parse_slice(input: &[u8]) -> ParseResult<Value> {
    parse_slice_with_limits(input, Limits::default())
}

/// Parse a JSON document from raw bytes with custom limits.
pub fn parse_slice_with_limits(input: &[u8], limits: Limits) -> ParseResult<Value> {
    if input.len() > limits.max_input_size {
        return Err(ParseError::new(ParseErrorKind::InputTooLarge, 0));
    }
    let text = std::str::from_utf8(input)
        .map_err(|e| ParseError::new(ParseErrorKind::InvalidUtf8, e.valid_up_to()))?;
    parse_with_limits(text, limits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err(kind: ParseErrorKind, offset: usize) -> ParseError {
        ParseError::new(kind, offset)
    }

    fn object(entries: &[(&str, Value)]) -> Value {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_parse_null() {
        assert_eq!(parse("null"), Ok(Value::Null));
    }

    #[test]
    fn test_parse_booleans() {
        assert_eq!(parse("true"), Ok(Value::Bool(true)));
        assert_eq!(parse("false"), Ok(Value::Bool(false)));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse("42"), Ok(Value::Number(42.0)));
        assert_eq!(parse("-123"), Ok(Value::Number(-123.0)));
        assert_eq!(parse("0"), Ok(Value::Number(0.0)));
        assert_eq!(parse("3.5"), Ok(Value::Number(3.5)));
    }

    #[test]
    fn test_parse_string() {
        assert_eq!(parse(r#""hello""#), Ok(Value::String("hello".to_string())));
    }

    #[test]
    fn test_parse_array() {
        assert_eq!(
            parse("[1, 2, 3]"),
            Ok(Value::Array(vec![
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Number(3.0),
            ]))
        );
        assert_eq!(parse("[ ]"), Ok(Value::Array(vec![])));
    }

    #[test]
    fn test_parse_object() {
        assert_eq!(
            parse(r#"{"a": 1, "b": 2}"#),
            Ok(object(&[("a", Value::from(1)), ("b", Value::from(2))]))
        );
        assert_eq!(parse("{ }"), Ok(Value::Object(Object::new())));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        assert_eq!(
            parse(r#"{"a": 1, "a": 2}"#),
            Ok(object(&[("a", Value::from(2))]))
        );
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(parse(" \n\t[true]\r\n "), Ok(Value::Array(vec![Value::Bool(true)])));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Err(err(ParseErrorKind::UnexpectedEndOfInput, 0)));
        assert_eq!(parse("   "), Err(err(ParseErrorKind::UnexpectedEndOfInput, 3)));
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(parse("@"), Err(err(ParseErrorKind::UnexpectedCharacter, 0)));
        assert_eq!(parse("[1, ?]"), Err(err(ParseErrorKind::UnexpectedCharacter, 4)));
        assert_eq!(parse("+1"), Err(err(ParseErrorKind::UnexpectedCharacter, 0)));
    }

    #[test]
    fn test_invalid_literal() {
        assert_eq!(parse("nul"), Err(err(ParseErrorKind::InvalidLiteral, 3)));
        assert_eq!(parse("[tru]"), Err(err(ParseErrorKind::InvalidLiteral, 4)));
        assert_eq!(parse("fals3"), Err(err(ParseErrorKind::InvalidLiteral, 4)));
    }

    #[test]
    fn test_trailing_content_rejected() {
        assert_eq!(parse("null extra"), Err(err(ParseErrorKind::TrailingInput, 5)));
        assert_eq!(parse("{} {}"), Err(err(ParseErrorKind::TrailingInput, 3)));
        // Literal matching is prefix-based; the remainder is trailing input
        assert_eq!(parse("truex"), Err(err(ParseErrorKind::TrailingInput, 4)));
    }

    #[test]
    fn test_trailing_comma_rejected() {
        assert_eq!(
            parse("[1, 2,]"),
            Err(err(ParseErrorKind::ExpectedCommaOrBracket, 6))
        );
        assert_eq!(
            parse(r#"{"a": 1,}"#),
            Err(err(ParseErrorKind::ExpectedStringKey, 8))
        );
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            parse("[1 2]"),
            Err(err(ParseErrorKind::ExpectedCommaOrBracket, 3))
        );
        assert_eq!(
            parse(r#"{"a": 1 "b": 2}"#),
            Err(err(ParseErrorKind::ExpectedCommaOrBracket, 8))
        );
    }

    #[test]
    fn test_object_key_and_colon() {
        assert_eq!(parse("{1: 2}"), Err(err(ParseErrorKind::ExpectedStringKey, 1)));
        assert_eq!(parse(r#"{"a" 1}"#), Err(err(ParseErrorKind::ExpectedColon, 5)));
    }

    #[test]
    fn test_unexpected_end_in_containers() {
        assert_eq!(parse("["), Err(err(ParseErrorKind::UnexpectedEndOfInput, 1)));
        assert_eq!(parse("[1,"), Err(err(ParseErrorKind::UnexpectedEndOfInput, 3)));
        assert_eq!(parse("{"), Err(err(ParseErrorKind::UnexpectedEndOfInput, 1)));
        assert_eq!(
            parse(r#"{"key": "value""#),
            Err(err(ParseErrorKind::UnexpectedEndOfInput, 15))
        );
        assert_eq!(parse(r#"{"k""#), Err(err(ParseErrorKind::UnexpectedEndOfInput, 4)));
    }

    #[test]
    fn test_nesting_depth_limit() {
        let limits = Limits::default().with_max_nesting_depth(2);

        // Depth 2 is allowed
        assert!(parse_with_limits("[[1]]", limits).is_ok());
        assert!(parse_with_limits(r#"{"a": [1]}"#, limits).is_ok());

        // Depth 3 exceeds limit, reported at the third opening bracket
        assert_eq!(
            parse_with_limits("[[[1]]]", limits),
            Err(err(ParseErrorKind::MaxDepthExceeded, 2))
        );
    }

    #[test]
    fn test_depth_resets_between_siblings() {
        let limits = Limits::default().with_max_nesting_depth(2);
        assert!(parse_with_limits("[[1], [2], {}, []]", limits).is_ok());
    }

    #[test]
    fn test_deep_nesting_default_limit() {
        let deep = format!("{}{}", "[".repeat(100_000), "]".repeat(100_000));
        assert_eq!(
            parse(&deep),
            Err(err(ParseErrorKind::MaxDepthExceeded, 128))
        );
    }

    #[test]
    fn test_input_size_limit() {
        let limits = Limits::default().with_max_input_size(4);
        assert_eq!(
            parse_with_limits("[1, 2]", limits),
            Err(err(ParseErrorKind::InputTooLarge, 0))
        );
        assert!(parse_with_limits("[1]", limits).is_ok());
    }

    #[test]
    fn test_parse_slice() {
        assert_eq!(parse_slice(b"[true]"), Ok(Value::Array(vec![Value::Bool(true)])));
        assert_eq!(
            parse_slice(&[b'"', b'a', 0xFF, b'"']),
            Err(err(ParseErrorKind::InvalidUtf8, 2))
        );
    }

    #[test]
    fn test_parse_slice_with_limits() {
        let limits = Limits::default().with_max_nesting_depth(1);
        assert_eq!(
            parse_slice_with_limits(b"[1]", limits),
            Ok(Value::Array(vec![Value::from(1)]))
        );
        assert_eq!(
            parse_slice_with_limits(b"[[1]]", limits),
            Err(err(ParseErrorKind::MaxDepthExceeded, 1))
        );

        // Size is checked before UTF-8 validation
        let limits = Limits::default().with_max_input_size(2);
        assert_eq!(
            parse_slice_with_limits(&[b'"', 0xFF, b'"'], limits),
            Err(err(ParseErrorKind::InputTooLarge, 0))
        );
    }

    #[test]
    fn test_nested_structure() {
        let result = parse(r#"{"arr": [1, {"nested": true}], "num": 42}"#).unwrap();
        assert!(result.is_object());
        let arr = result.get("arr").unwrap();
        assert!(arr.is_array());
        assert_eq!(arr.get_index(1).and_then(|v| v.get("nested")), Ok(&Value::Bool(true)));
        assert_eq!(result.get("num").and_then(Value::as_f64), Ok(42.0));
    }
}
