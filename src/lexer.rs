//! Byte cursor over JSON text.
//!
//! The lexer owns the input position and reads the leaf productions of the
//! grammar: whitespace, the `null`/`true`/`false` literals, strings and
//! numbers. Structural characters are left to the parser, which inspects
//! them with [`Lexer::peek`] so that each failure is reported with the
//! error kind of the production that expected something else.
//!
//! Every error carries the byte offset of the first offending character.

use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::limits::Limits;

/// Cursor over a complete, in-memory JSON document.
pub struct Lexer<'a> {
    text: &'a str,
    input: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(text: &'a str, limits: &Limits) -> ParseResult<Self> {
        if text.len() > limits.max_input_size {
            return Err(ParseError::new(ParseErrorKind::InputTooLarge, 0));
        }

        Ok(Self {
            text,
            input: text.as_bytes(),
            pos: 0,
        })
    }

    /// Get the current position in the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Peek at the current byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consume and return the current byte.
    pub fn advance(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    /// Build an error of `kind` at the current position.
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.pos)
    }

    /// Skip JSON whitespace (space, tab, newline, carriage return).
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    /// Match `literal` byte for byte, failing at the first divergent byte.
    pub fn expect_literal(&mut self, literal: &[u8]) -> ParseResult<()> {
        for &b in literal {
            if self.peek() != Some(b) {
                return Err(self.error(ParseErrorKind::InvalidLiteral));
            }
            self.pos += 1;
        }
        Ok(())
    }

    /// Read a string starting at the opening quote and return its unescaped
    /// contents.
    pub fn read_string(&mut self) -> ParseResult<String> {
        // Consume opening quote
        self.advance();

        let mut result = String::new();
        // Start of the pending run of verbatim characters. Runs only begin
        // and end next to ASCII bytes, so slicing `text` stays on char
        // boundaries.
        let mut run_start = self.pos;

        loop {
            match self.peek() {
                None => return Err(self.error(ParseErrorKind::UnterminatedString)),
                Some(b'"') => {
                    result.push_str(&self.text[run_start..self.pos]);
                    self.pos += 1;
                    return Ok(result);
                }
                Some(b'\\') => {
                    result.push_str(&self.text[run_start..self.pos]);
                    self.pos += 1;
                    let escaped = self.read_escape_sequence()?;
                    result.push(escaped);
                    run_start = self.pos;
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    /// Read an escape sequence after a backslash.
    fn read_escape_sequence(&mut self) -> ParseResult<char> {
        let escaped = match self.peek() {
            None => return Err(self.error(ParseErrorKind::UnterminatedString)),
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\x08',
            Some(b'f') => '\x0C',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => {
                self.pos += 1;
                return self.read_unicode_escape();
            }
            Some(_) => return Err(self.error(ParseErrorKind::InvalidEscape)),
        };
        self.pos += 1;
        Ok(escaped)
    }

    /// Read the four hex digits of a `\uXXXX` escape.
    ///
    /// Surrogate code units are not paired up; each one decodes to
    /// U+FFFD REPLACEMENT CHARACTER.
    fn read_unicode_escape(&mut self) -> ParseResult<char> {
        let codepoint = self.read_hex4()?;
        Ok(char::from_u32(u32::from(codepoint)).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Read 4 hex digits and return the value.
    fn read_hex4(&mut self) -> ParseResult<u16> {
        let mut value: u16 = 0;
        for _ in 0..4 {
            let b = self
                .peek()
                .ok_or_else(|| self.error(ParseErrorKind::UnterminatedString))?;
            let digit = match b {
                b'0'..=b'9' => b - b'0',
                b'a'..=b'f' => b - b'a' + 10,
                b'A'..=b'F' => b - b'A' + 10,
                _ => return Err(self.error(ParseErrorKind::InvalidEscape)),
            };
            value = (value << 4) | u16::from(digit);
            self.pos += 1;
        }
        Ok(value)
    }

    /// Read a number per `-? (0 | [1-9][0-9]*) (.[0-9]+)? ([eE][+-]?[0-9]+)?`.
    pub fn read_number(&mut self) -> ParseResult<f64> {
        let start = self.pos;

        // Optional minus sign
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }

        // Integer part
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                // After leading zero, must not have more digits
                if let Some(b'0'..=b'9') = self.peek() {
                    return Err(self.error(ParseErrorKind::InvalidNumber));
                }
            }
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return Err(self.error(ParseErrorKind::InvalidNumber)),
        }

        // Fractional part
        if self.peek() == Some(b'.') {
            self.pos += 1;
            self.expect_digits()?;
        }

        // Exponent
        if let Some(b'e' | b'E') = self.peek() {
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            self.expect_digits()?;
        }

        match self.text[start..self.pos].parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ParseError::new(ParseErrorKind::InvalidNumber, start)),
        }
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
    }

    /// At least one digit.
    fn expect_digits(&mut self) -> ParseResult<()> {
        match self.peek() {
            Some(b'0'..=b'9') => {
                self.skip_digits();
                Ok(())
            }
            _ => Err(self.error(ParseErrorKind::InvalidNumber)),
        }
    }
}
