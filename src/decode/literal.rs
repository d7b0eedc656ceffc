use crate::decode::cursor::Cursor;
use crate::{ParseError, Result, Value};

/// Match a fixed keyword (`true`, `false`, `null`) at the cursor.
///
/// The driver has already dispatched on the first byte, so it is asserted
/// rather than re-checked. On success the cursor sits just past the keyword;
/// on failure its position is unspecified and the caller discards it.
pub(crate) fn parse_literal(
    cursor: &mut Cursor<'_>,
    keyword: &'static str,
    value: Value,
) -> Result<Value> {
    let bytes = keyword.as_bytes();
    debug_assert_eq!(cursor.peek(), Some(bytes[0]));
    cursor.bump();
    for &expected in &bytes[1..] {
        if cursor.peek() != Some(expected) {
            return Err(ParseError::InvalidValue);
        }
        cursor.bump();
    }
    Ok(value)
}
