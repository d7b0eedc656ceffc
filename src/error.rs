use thiserror::Error;

/// Failure classes reported by [`parse`](crate::parse).
///
/// Errors carry no positional detail; the parser is all-or-nothing over the
/// whole input, so the class alone tells the caller what went wrong.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("expected a value")]
    ExpectValue,
    /// A literal or number was malformed.
    #[error("invalid value")]
    InvalidValue,
    /// A valid value was followed by non-whitespace content.
    #[error("root is not singular")]
    RootNotSingular,
    /// A number literal overflows the range of an f64.
    #[error("number too big")]
    NumberTooBig,
}
