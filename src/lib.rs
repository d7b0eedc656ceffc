//! Minimal JSON parser for literal and number values.
//!
//! Accepts a complete text holding exactly one of `null`, `true`, `false`,
//! or a JSON number, surrounded by optional whitespace. Strings, arrays,
//! and objects are out of scope.
//!
//! # Example
//! ```
//! use jsonatom::{parse, Value};
//!
//! assert_eq!(parse("null"), Ok(Value::Null));
//! assert_eq!(parse(" -1.5e3 ").unwrap().number(), -1500.0);
//! ```
//!
//! Parsing is a pure function over the input string: no shared state, no
//! I/O, safe to call from any number of threads.

pub mod decode;
pub mod error;
pub mod value;

pub use crate::error::ParseError;
pub use crate::value::{Kind, Value};

pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse a JSON text into a [`Value`].
pub fn parse(input: &str) -> Result<Value> {
    decode::parse(input)
}

/// Check a JSON text for validity without keeping the value.
pub fn validate_str(input: &str) -> Result<()> {
    decode::parse(input).map(|_| ())
}
