//! Decoded value types with syntactic typing.
//!
//! LAXON uses syntactic typing - the shape of a token determines its
//! type, not a schema. Quoted text is always a string; bare tokens
//! classify as keyword, number, or fallback string.

use phf::phf_map;

/// A decoded LAXON value.
///
/// The tree is built bottom-up by the decoder: each container owns its
/// children outright, so there are no cycles and no parent pointers.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null: `null` in any letter case.
    Null,

    /// Boolean: `true` or `false` in any letter case.
    Bool(bool),

    /// Integer: `42`, `-7`, `0`.
    Int(i64),

    /// Float: `3.14`, `-2.5`. Only bare tokens containing `.` classify
    /// as floats.
    Float(f64),

    /// String: quoted (`"a"`, `'a'`) or a bare word (`localhost`).
    String(String),

    /// Array: `[1, 2, 3]`, order preserved.
    Array(Vec<Value>),

    /// Object: `{a: 1}`, insertion-ordered key/value pairs.
    ///
    /// Keys are unique within one object; a repeated key overwrites the
    /// earlier value in place (last write wins, position kept).
    Object(Vec<(String, Value)>),
}

/// Keyword tokens, matched case-insensitively against the lowercase form.
#[derive(Debug, Clone, Copy)]
enum Keyword {
    True,
    False,
    Null,
}

static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "true" => Keyword::True,
    "false" => Keyword::False,
    "null" => Keyword::Null,
};

impl Value {
    /// Check if this is the null value.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as boolean.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as integer.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as float. Integers widen losslessly enough for
    /// config-style use; exact callers should match on `Int` directly.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get as string slice.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as array slice.
    #[inline]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get as object entries (insertion order).
    #[inline]
    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up an object entry by key.
    ///
    /// Linear scan: objects in this grammar are small, and insertion
    /// order is part of the data model.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Classify a bare (unquoted) token into a typed value.
    ///
    /// Priority order:
    /// 1. `true` / `false` / `null`, case-insensitive
    /// 2. float, only if the token contains `.` (so `1.5e3` is a float
    ///    but `1e5` stays a string - exponents need a decimal point)
    /// 3. integer
    /// 4. fallback: the raw token as a string (`localhost`, `None`, ...)
    pub fn from_bare(token: &str) -> Value {
        // Keyword check on the lowercase form; length gate avoids
        // allocating for long tokens that cannot match.
        if token.len() <= 5 {
            if let Some(kw) = KEYWORDS.get(token.to_ascii_lowercase().as_str()) {
                return match kw {
                    Keyword::True => Value::Bool(true),
                    Keyword::False => Value::Bool(false),
                    Keyword::Null => Value::Null,
                };
            }
        }

        if token.contains('.') {
            if let Ok(f) = token.parse::<f64>() {
                return Value::Float(f);
            }
        } else if let Ok(i) = token.parse::<i64>() {
            return Value::Int(i);
        }

        Value::String(token.to_owned())
    }

    /// Coerce a value parsed in object-key position into key text.
    ///
    /// Scalars use their canonical spelling; containers collapse to a
    /// fixed marker, mirroring how the grammar's host environments
    /// stringify them.
    pub(crate) fn into_key(self) -> String {
        match self {
            Value::String(s) => s,
            Value::Null => "null".to_owned(),
            Value::Bool(true) => "true".to_owned(),
            Value::Bool(false) => "false".to_owned(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Array(_) => "array".to_owned(),
            Value::Object(_) => "object".to_owned(),
        }
    }
}
