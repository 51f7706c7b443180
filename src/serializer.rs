//! JSON text output.
//!
//! Serialization is a pure function of the tree and the `pretty` flag.
//! Object members come out in the map's sorted key order, so a given tree
//! always renders to the same bytes.
//!
//! Compact mode emits no whitespace at all. Pretty mode breaks after every
//! non-empty opening bracket, indents two spaces per level and puts one
//! space after each `:`.

use crate::value::{Object, Value};

const INDENT: &str = "  ";

/// Integral values below this magnitude are exactly representable and print
/// through `i64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

/// Serialize a value, compact or indented.
pub fn stringify(value: &Value, pretty: bool) -> String {
    let mut output = String::new();
    serialize_value(value, pretty.then_some(0), &mut output);
    output
}

/// Serialize without any whitespace.
pub fn to_string_compact(value: &Value) -> String {
    stringify(value, false)
}

/// Serialize with two-space indentation.
pub fn to_string_pretty(value: &Value) -> String {
    stringify(value, true)
}

/// Format a number.
///
/// Integral values print without a decimal point. NaN and the infinities
/// have no JSON form and print as `null`.
pub fn serialize_number(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }
    if value.trunc() == value && value.abs() < MAX_EXACT_INTEGER {
        // Also folds -0.0 into "0"
        return (value as i64).to_string();
    }
    // Shortest round-trip representation, never in exponent form
    value.to_string()
}

/// `level` is the current indentation depth in pretty mode, `None` in
/// compact mode.
fn serialize_value(value: &Value, level: Option<usize>, output: &mut String) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Number(n) => output.push_str(&serialize_number(*n)),
        Value::String(s) => serialize_string(s, output),
        Value::Array(arr) => serialize_array(arr, level, output),
        Value::Object(obj) => serialize_object(obj, level, output),
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Serialize a string with proper JSON escaping.
fn serialize_string(s: &str, output: &mut String) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' => {
                // Other control characters as \u00XX
                let b = c as u8;
                output.push_str("\\u00");
                output.push(HEX_DIGITS[usize::from(b >> 4)] as char);
                output.push(HEX_DIGITS[usize::from(b & 0xF)] as char);
            }
            c => output.push(c),
        }
    }
    output.push('"');
}

fn newline_indent(level: usize, output: &mut String) {
    output.push('\n');
    for _ in 0..level {
        output.push_str(INDENT);
    }
}

/// Serialize an array.
fn serialize_array(arr: &[Value], level: Option<usize>, output: &mut String) {
    output.push('[');
    for (i, value) in arr.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        if let Some(level) = level {
            newline_indent(level + 1, output);
        }
        serialize_value(value, level.map(|l| l + 1), output);
    }
    if let (Some(level), false) = (level, arr.is_empty()) {
        newline_indent(level, output);
    }
    output.push(']');
}

/// Serialize an object in key order.
fn serialize_object(obj: &Object, level: Option<usize>, output: &mut String) {
    output.push('{');
    for (i, (key, value)) in obj.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        if let Some(level) = level {
            newline_indent(level + 1, output);
        }
        serialize_string(key, output);
        output.push(':');
        if level.is_some() {
            output.push(' ');
        }
        serialize_value(value, level.map(|l| l + 1), output);
    }
    if let (Some(level), false) = (level, obj.is_empty()) {
        newline_indent(level, output);
    }
    output.push('}');
}
