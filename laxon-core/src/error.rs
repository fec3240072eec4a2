//! Positioned parse errors.
//!
//! Every error carries the 0-based byte offset where it was detected.
//! A decode either yields a complete tree or exactly one of these -
//! there is no recovery and no partial result.

use std::fmt;

/// Error returned when decoding fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input ran out while a value, key, string, or container was still
    /// expected. `expected` names the closer when one is known (`}`,
    /// `]`, `:`).
    UnexpectedEndOfInput { pos: usize, expected: Option<char> },

    /// The character at `pos` cannot start any value.
    UnexpectedCharacter { found: char, pos: usize },

    /// An object key was not followed by `:`.
    ExpectedColonAfterKey { pos: usize },

    /// Missing separator between object entries.
    ExpectedCommaOrCloseBrace { pos: usize },

    /// Missing separator between array elements.
    ExpectedCommaOrCloseBracket { pos: usize },

    /// A string's closing quote was never found. `pos` is the offset of
    /// the opening quote.
    UnterminatedString { pos: usize },
}

impl ParseError {
    /// The 0-based byte offset where the error was detected.
    pub fn position(&self) -> usize {
        match *self {
            Self::UnexpectedEndOfInput { pos, .. } => pos,
            Self::UnexpectedCharacter { pos, .. } => pos,
            Self::ExpectedColonAfterKey { pos } => pos,
            Self::ExpectedCommaOrCloseBrace { pos } => pos,
            Self::ExpectedCommaOrCloseBracket { pos } => pos,
            Self::UnterminatedString { pos } => pos,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UnexpectedEndOfInput { pos, expected: Some(c) } => {
                write!(f, "unexpected end of input at position {pos} (expected '{c}')")
            }
            Self::UnexpectedEndOfInput { pos, expected: None } => {
                write!(f, "unexpected end of input at position {pos}")
            }
            Self::UnexpectedCharacter { found, pos } => {
                write!(f, "unexpected character '{found}' at position {pos}")
            }
            Self::ExpectedColonAfterKey { pos } => {
                write!(f, "expected ':' after object key at position {pos}")
            }
            Self::ExpectedCommaOrCloseBrace { pos } => {
                write!(f, "expected ',' or '}}' at position {pos}")
            }
            Self::ExpectedCommaOrCloseBracket { pos } => {
                write!(f, "expected ',' or ']' at position {pos}")
            }
            Self::UnterminatedString { pos } => {
                write!(f, "unterminated string starting at position {pos}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
