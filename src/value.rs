//! The JSON value tree.
//!
//! [`Value`] is a closed sum over the six JSON kinds. Containers own their
//! children outright, so a tree is acyclic and detaching a sub-tree is a
//! move ([`Value::take`], [`Value::remove`]) rather than an alias.
//!
//! Objects are stored in a [`BTreeMap`], so members iterate (and serialize)
//! in sorted key order regardless of insertion order.
//!
//! Every typed accessor checks the active variant and returns
//! [`ValueError::TypeMismatch`] on the wrong kind.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::error::{ParseError, ValueError, ValueResult};

/// Ordered sequence of values.
pub type Array = Vec<Value>;

/// Mapping from unique string keys to values, sorted by key.
pub type Object = BTreeMap<String, Value>;

/// The six JSON kinds, used to report type mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `null`
    Null,
    /// `true` / `false`
    Bool,
    /// IEEE-754 double
    Number,
    /// UTF-8 string
    String,
    /// `[...]`
    Array,
    /// `{...}`
    Object,
}

impl Kind {
    /// Lowercase name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of a JSON document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON null literal
    #[default]
    Null,
    /// JSON boolean
    Bool(bool),
    /// JSON number; integral and fractional values share `f64`
    Number(f64),
    /// JSON string
    String(String),
    /// JSON array
    Array(Array),
    /// JSON object with sorted keys
    Object(Object),
}

impl Value {
    /// The kind of the active variant.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    fn mismatch(&self, expected: Kind) -> ValueError {
        ValueError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The boolean payload.
    pub fn as_bool(&self) -> ValueResult<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(Kind::Bool)),
        }
    }

    /// The numeric payload.
    pub fn as_f64(&self) -> ValueResult<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            _ => Err(self.mismatch(Kind::Number)),
        }
    }

    /// The string payload.
    pub fn as_str(&self) -> ValueResult<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    /// Mutable access to the string payload.
    pub fn as_string_mut(&mut self) -> ValueResult<&mut String> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    /// The array payload.
    pub fn as_array(&self) -> ValueResult<&Array> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    /// Mutable access to the array payload.
    pub fn as_array_mut(&mut self) -> ValueResult<&mut Array> {
        match self {
            Value::Array(a) => Ok(a),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    /// The object payload.
    pub fn as_object(&self) -> ValueResult<&Object> {
        match self {
            Value::Object(o) => Ok(o),
            _ => Err(self.mismatch(Kind::Object)),
        }
    }

    /// Mutable access to the object payload.
    pub fn as_object_mut(&mut self) -> ValueResult<&mut Object> {
        match self {
            Value::Object(o) => Ok(o),
            _ => Err(self.mismatch(Kind::Object)),
        }
    }

    /// Look up a member of an object.
    ///
    /// Fails with `KeyNotFound` when absent; never inserts.
    pub fn get(&self, key: &str) -> ValueResult<&Value> {
        self.as_object()?
            .get(key)
            .ok_or_else(|| ValueError::KeyNotFound(key.to_string()))
    }

    /// Mutable member access with upsert semantics: an absent key is
    /// inserted holding `Null`.
    pub fn get_mut(&mut self, key: &str) -> ValueResult<&mut Value> {
        Ok(self.as_object_mut()?.entry(key.to_string()).or_default())
    }

    /// Look up an element of an array.
    pub fn get_index(&self, index: usize) -> ValueResult<&Value> {
        let arr = self.as_array()?;
        arr.get(index).ok_or(ValueError::IndexOutOfRange {
            index,
            len: arr.len(),
        })
    }

    /// Mutable element access. Out-of-range positions fail; the array never
    /// grows implicitly.
    pub fn get_index_mut(&mut self, index: usize) -> ValueResult<&mut Value> {
        let arr = self.as_array_mut()?;
        let len = arr.len();
        arr.get_mut(index)
            .ok_or(ValueError::IndexOutOfRange { index, len })
    }

    /// Append to an array.
    pub fn push(&mut self, value: impl Into<Value>) -> ValueResult<()> {
        self.as_array_mut()?.push(value.into());
        Ok(())
    }

    /// Insert or overwrite an object member, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> ValueResult<Option<Value>> {
        Ok(self.as_object_mut()?.insert(key.into(), value.into()))
    }

    /// Detach an object member.
    pub fn remove(&mut self, key: &str) -> ValueResult<Option<Value>> {
        Ok(self.as_object_mut()?.remove(key))
    }

    /// Move this value out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

// Operator indexing mirrors the fallible accessors but panics on failure.
// Prefer `get` / `get_index` when the shape of the document is not known.

impl Index<usize> for Value {
    type Output = Value;

    /// # Panics
    ///
    /// If the value is not an array or `index` is out of range.
    #[allow(clippy::panic)]
    fn index(&self, index: usize) -> &Value {
        match self.get_index(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<usize> for Value {
    /// # Panics
    ///
    /// If the value is not an array or `index` is out of range.
    #[allow(clippy::panic)]
    fn index_mut(&mut self, index: usize) -> &mut Value {
        match self.get_index_mut(index) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// # Panics
    ///
    /// If the value is not an object or `key` is absent.
    #[allow(clippy::panic)]
    fn index(&self, key: &str) -> &Value {
        match self.get(key) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<&str> for Value {
    /// Absent keys are inserted holding `Null`.
    ///
    /// # Panics
    ///
    /// If the value is not an object.
    #[allow(clippy::panic)]
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self.get_mut(key) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Compact JSON text; use `{:#}` for the pretty form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serializer::stringify(self, f.alternate()))
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}
