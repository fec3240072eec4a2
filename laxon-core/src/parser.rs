//! Single-pass recursive-descent decoder for the tolerant grammar.
//!
//! There is no separate lexer: tokenization and tree construction are
//! fused. One mutable cursor moves strictly forward over the input;
//! each sub-parser is entered with the cursor at (or at whitespace
//! before) the first character of its construct and leaves it one past
//! the last character it consumed. No backtracking anywhere.
//!
//! Recursion depth equals the nesting depth of the input. There is no
//! depth limit - callers decoding untrusted input should bound it
//! themselves (for example by decoding on a thread with a fixed stack).

use memchr::memchr2;

use crate::error::ParseError;
use crate::value::Value;

/// Decode one value from the input.
///
/// Standard JSON is a subset of the accepted grammar, which also
/// tolerates single-quoted strings, unquoted keys and bare scalars,
/// trailing commas, and case-insensitive `true`/`false`/`null`.
///
/// Input after the first complete value is ignored; use [`Decoder`]
/// directly if you need to inspect the remainder.
///
/// # Example
///
/// ```
/// use laxon_core::{decode, Value};
///
/// let v = decode("{host: localhost, port: 8080,}").unwrap();
/// assert_eq!(v.get("host").and_then(Value::as_str), Some("localhost"));
/// assert_eq!(v.get("port").and_then(Value::as_i64), Some(8080));
/// ```
pub fn decode(input: &str) -> Result<Value, ParseError> {
    Decoder::new(input).decode()
}

/// The decoder: an input buffer plus a forward-only scan position.
///
/// One decoder decodes one input. It is cheap to construct and not
/// meant to be shared or reused across concurrent decodes - make a
/// fresh one per input.
pub struct Decoder<'a> {
    input: &'a str,
    /// Byte offset into `input`, always on a char boundary, only ever
    /// increases.
    pos: usize,
}

impl<'a> Decoder<'a> {
    /// Create a decoder over `input` with the cursor at the start.
    pub fn new(input: &'a str) -> Self {
        Decoder { input, pos: 0 }
    }

    /// Decode a single value, leaving the cursor just past it.
    pub fn decode(&mut self) -> Result<Value, ParseError> {
        self.parse_value()
    }

    /// Current cursor position (0-based byte offset).
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Input not yet consumed. After a successful `decode` this is
    /// whatever followed the first value; strict callers can require it
    /// to be blank.
    #[inline]
    pub fn remainder(&self) -> &'a str {
        &self.input[self.pos..]
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    #[inline]
    fn bump(&mut self, ch: char) {
        self.pos += ch.len_utf8();
    }

    /// Advance past whitespace. Idempotent, safe at end of input.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump(ch);
        }
    }

    /// Dispatch on the next non-whitespace character.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(ParseError::UnexpectedEndOfInput { pos: self.pos, expected: None }),
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some(quote @ ('"' | '\'')) => self.parse_string(quote),
            Some(ch) if is_bare_char(ch) => Ok(self.parse_bare()),
            Some(ch) => Err(ParseError::UnexpectedCharacter { found: ch, pos: self.pos }),
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.pos += 1; // '{'
        let mut entries: Vec<(String, Value)> = Vec::new();

        self.skip_whitespace();
        match self.peek() {
            Some('}') => {
                self.pos += 1;
                return Ok(Value::Object(entries));
            }
            None => {
                return Err(ParseError::UnexpectedEndOfInput {
                    pos: self.pos,
                    expected: Some('}'),
                });
            }
            _ => {}
        }

        loop {
            // Keys go through the full value parser, so quoted,
            // unquoted, and even numeric or boolean-looking keys all
            // work; non-strings coerce to their text form.
            let key = self.parse_value()?.into_key();

            self.skip_whitespace();
            match self.peek() {
                Some(':') => self.pos += 1,
                _ => return Err(ParseError::ExpectedColonAfterKey { pos: self.pos }),
            }

            let value = self.parse_value()?;
            insert_entry(&mut entries, key, value);

            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.pos += 1;
                    return Ok(Value::Object(entries));
                }
                Some(',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    match self.peek() {
                        // Trailing comma
                        Some('}') => {
                            self.pos += 1;
                            return Ok(Value::Object(entries));
                        }
                        None => {
                            return Err(ParseError::UnexpectedEndOfInput {
                                pos: self.pos,
                                expected: Some('}'),
                            });
                        }
                        _ => {}
                    }
                }
                None => {
                    return Err(ParseError::UnexpectedEndOfInput {
                        pos: self.pos,
                        expected: Some('}'),
                    });
                }
                Some(_) => {
                    return Err(ParseError::ExpectedCommaOrCloseBrace { pos: self.pos });
                }
            }
        }
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.pos += 1; // '['
        let mut items: Vec<Value> = Vec::new();

        self.skip_whitespace();
        match self.peek() {
            Some(']') => {
                self.pos += 1;
                return Ok(Value::Array(items));
            }
            None => {
                return Err(ParseError::UnexpectedEndOfInput {
                    pos: self.pos,
                    expected: Some(']'),
                });
            }
            _ => {}
        }

        loop {
            items.push(self.parse_value()?);

            self.skip_whitespace();
            match self.peek() {
                Some(']') => {
                    self.pos += 1;
                    return Ok(Value::Array(items));
                }
                Some(',') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    match self.peek() {
                        // Trailing comma
                        Some(']') => {
                            self.pos += 1;
                            return Ok(Value::Array(items));
                        }
                        None => {
                            return Err(ParseError::UnexpectedEndOfInput {
                                pos: self.pos,
                                expected: Some(']'),
                            });
                        }
                        _ => {}
                    }
                }
                None => {
                    return Err(ParseError::UnexpectedEndOfInput {
                        pos: self.pos,
                        expected: Some(']'),
                    });
                }
                Some(_) => {
                    return Err(ParseError::ExpectedCommaOrCloseBracket { pos: self.pos });
                }
            }
        }
    }

    /// Parse a string opened by `quote` (`"` or `'`). Only the matching
    /// quote terminates it, so the other quote style nests freely
    /// without escaping.
    fn parse_string(&mut self, quote: char) -> Result<Value, ParseError> {
        let start = self.pos;
        self.pos += 1; // opening quote (ASCII)

        let bytes = self.input.as_bytes();
        let mut out = String::new();

        loop {
            // Bulk-copy up to the next quote or backslash. Both are
            // ASCII, so byte search never lands mid-codepoint.
            let found = match memchr2(quote as u8, b'\\', &bytes[self.pos..]) {
                Some(i) => i,
                None => return Err(ParseError::UnterminatedString { pos: start }),
            };
            out.push_str(&self.input[self.pos..self.pos + found]);
            self.pos += found;

            if bytes[self.pos] == b'\\' {
                self.pos += 1;
                match self.peek() {
                    None => return Err(ParseError::UnterminatedString { pos: start }),
                    Some(esc) => {
                        out.push(unescape(esc));
                        self.bump(esc);
                    }
                }
            } else {
                self.pos += 1; // closing quote
                return Ok(Value::String(out));
            }
        }
    }

    /// Greedily consume a run of bare-class characters and classify it.
    fn parse_bare(&mut self) -> Value {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !is_bare_char(ch) {
                break;
            }
            self.bump(ch);
        }
        Value::from_bare(&self.input[start..self.pos])
    }
}

/// Characters allowed in a bare (unquoted) token.
///
/// Permissive enough for words and signed/decimal numbers, while
/// excluding the structural characters `{}[]:,"'` and whitespace, so a
/// bare token's end is always unambiguous.
#[inline]
fn is_bare_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '?' | '!' | '-' | '_')
}

/// Escape interpretation. `n`/`t`/`r` map to control characters;
/// everything else - backslash, either quote, unknown escapes - passes
/// through as itself.
#[inline]
fn unescape(ch: char) -> char {
    match ch {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        other => other,
    }
}

/// Insert with last-write-wins semantics, keeping the first
/// occurrence's slot in the insertion order.
fn insert_entry(entries: &mut Vec<(String, Value)>, key: String, value: Value) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => entries.push((key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(entries: &[(&str, Value)]) -> Value {
        Value::Object(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_scalars() {
        assert_eq!(decode("42"), Ok(Value::Int(42)));
        assert_eq!(decode("3.14"), Ok(Value::Float(3.14)));
        assert_eq!(decode("true"), Ok(Value::Bool(true)));
        assert_eq!(decode("null"), Ok(Value::Null));
        assert_eq!(decode("hello"), Ok(Value::String("hello".into())));
        assert_eq!(decode("  42  "), Ok(Value::Int(42)));
    }

    #[test]
    fn test_quote_styles() {
        assert_eq!(decode(r#""hi""#), Ok(Value::String("hi".into())));
        assert_eq!(decode("'hi'"), Ok(Value::String("hi".into())));
        // The other quote style nests without escaping
        assert_eq!(decode(r#""it's""#), Ok(Value::String("it's".into())));
        assert_eq!(decode(r#"'say "hi"'"#), Ok(Value::String(r#"say "hi""#.into())));
    }

    #[test]
    fn test_escapes() {
        assert_eq!(decode(r#""a\nb""#), Ok(Value::String("a\nb".into())));
        assert_eq!(decode(r#""a\tb""#), Ok(Value::String("a\tb".into())));
        assert_eq!(decode(r#""a\rb""#), Ok(Value::String("a\rb".into())));
        assert_eq!(decode(r#""a\\b""#), Ok(Value::String("a\\b".into())));
        assert_eq!(decode(r#""a\"b""#), Ok(Value::String("a\"b".into())));
        assert_eq!(decode(r#"'a\'b'"#), Ok(Value::String("a'b".into())));
        // Unknown escapes pass through unchanged
        assert_eq!(decode(r#""a\qb""#), Ok(Value::String("aqb".into())));
        // Escaped quote does not terminate the string
        assert_eq!(decode(r#""\\""#), Ok(Value::String("\\".into())));
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(decode("{}"), Ok(Value::Object(vec![])));
        assert_eq!(decode("[]"), Ok(Value::Array(vec![])));
        assert_eq!(decode("{  }"), Ok(Value::Object(vec![])));
        assert_eq!(decode("[ \t\n ]"), Ok(Value::Array(vec![])));
    }

    #[test]
    fn test_objects() {
        assert_eq!(
            decode(r#"{"k":"v"}"#),
            Ok(obj(&[("k", Value::String("v".into()))]))
        );
        assert_eq!(
            decode("{'k':'v'}"),
            Ok(obj(&[("k", Value::String("v".into()))]))
        );
        assert_eq!(
            decode("{k:v}"),
            Ok(obj(&[("k", Value::String("v".into()))]))
        );
    }

    #[test]
    fn test_coerced_keys() {
        assert_eq!(decode("{123: a}"), Ok(obj(&[("123", Value::String("a".into()))])));
        assert_eq!(decode("{true: 1}"), Ok(obj(&[("true", Value::Int(1))])));
        assert_eq!(decode("{null: 1}"), Ok(obj(&[("null", Value::Int(1))])));
        assert_eq!(decode("{1.5: x}"), Ok(obj(&[("1.5", Value::String("x".into()))])));
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let v = decode("{a: 1, b: 2, a: 3}").unwrap();
        // Value overwritten, slot position kept
        assert_eq!(
            v,
            obj(&[("a", Value::Int(3)), ("b", Value::Int(2))])
        );
    }

    #[test]
    fn test_trailing_commas() {
        assert_eq!(decode("[1,2,3,]"), decode("[1,2,3]"));
        assert_eq!(decode("{a:1,}"), decode("{a:1}"));
        assert_eq!(decode("[1, 2, 3 , ]"), decode("[1,2,3]"));
        assert_eq!(decode("{a: 1 , }"), decode("{a:1}"));
    }

    #[test]
    fn test_nested() {
        let v = decode(
            r#"{"users":[{"name":"John","active":true},{"name":"Jane","active":false}],"count":2}"#,
        )
        .unwrap();
        let users = v.get("users").and_then(Value::as_array).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].get("name").and_then(Value::as_str), Some("John"));
        assert_eq!(users[0].get("active").and_then(Value::as_bool), Some(true));
        assert_eq!(users[1].get("name").and_then(Value::as_str), Some("Jane"));
        assert_eq!(users[1].get("active").and_then(Value::as_bool), Some(false));
        assert_eq!(v.get("count").and_then(Value::as_i64), Some(2));
    }

    #[test]
    fn test_bare_tokens_end_at_structure() {
        assert_eq!(
            decode("[a,b]"),
            Ok(Value::Array(vec![
                Value::String("a".into()),
                Value::String("b".into()),
            ]))
        );
        assert_eq!(
            decode("{url: example.com?q=1}"),
            Err(ParseError::ExpectedCommaOrCloseBrace { pos: 19 })
        );
    }

    #[test]
    fn test_unicode_passthrough() {
        assert_eq!(decode("\"sn\u{2603}w\""), Ok(Value::String("sn\u{2603}w".into())));
        assert_eq!(decode("'café'"), Ok(Value::String("café".into())));
    }

    #[test]
    fn test_remainder() {
        let mut d = Decoder::new("42 trailing");
        assert_eq!(d.decode(), Ok(Value::Int(42)));
        assert_eq!(d.remainder(), " trailing");
        assert_eq!(d.pos(), 2);
    }

    #[test]
    fn test_cursor_invariant_one_past_construct() {
        let mut d = Decoder::new("[1,2] x");
        d.decode().unwrap();
        assert_eq!(d.pos(), 5);

        let mut d = Decoder::new("'ab'c");
        d.decode().unwrap();
        assert_eq!(d.pos(), 4);
    }

    #[test]
    fn test_whitespace_forms() {
        assert_eq!(decode("\t\n\r [ 1 ,\n2 ]"), decode("[1,2]"));
        // Non-ASCII whitespace is whitespace too
        assert_eq!(decode("\u{a0}1"), decode("1"));
    }
}
