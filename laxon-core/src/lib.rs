//! LAXON Core Decoder
//!
//! Single-pass, recursive-descent decoder for LAXON, a lax JSON-like
//! object notation. Strict JSON is a subset of the accepted grammar,
//! which additionally tolerates:
//!
//! - single- or double-quoted strings (`'a'` and `"a"`)
//! - unquoted object keys and bare scalar values (`{host: localhost}`)
//! - trailing commas in objects and arrays (`[1, 2, 3,]`)
//! - case-insensitive `true` / `false` / `null`
//!
//! # Architecture
//!
//! - **parser.rs** - `Decoder` cursor + recursive-descent sub-parsers
//! - **value.rs** - `Value` tree and bare-token classification
//! - **error.rs** - positioned parse errors
//!
//! # Example
//!
//! ```
//! use laxon_core::{decode, Value};
//!
//! let v = decode("{name: 'Ada', tags: [math, pioneer,], retired: NULL}").unwrap();
//! assert_eq!(v.get("name").and_then(Value::as_str), Some("Ada"));
//! assert!(v.get("retired").unwrap().is_null());
//! ```
//!
//! Decoding is synchronous and recursion depth tracks input nesting
//! depth; there is no built-in depth limit, so callers handling
//! untrusted input should bound it externally.

pub mod error;
pub mod parser;
pub mod value;

pub use error::ParseError;
pub use parser::{decode, Decoder};
pub use value::Value;
