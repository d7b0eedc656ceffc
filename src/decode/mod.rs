mod cursor;
mod literal;
mod number;

use crate::{ParseError, Result, Value};
use cursor::Cursor;

/// Parse a complete text holding a single literal or number value.
///
/// Leading and trailing whitespace is allowed; anything else after the value
/// is [`ParseError::RootNotSingular`]. No value escapes a failed parse.
pub fn parse(input: &str) -> Result<Value> {
    let mut cursor = Cursor::new(input);
    cursor.skip_whitespace();
    let value = parse_value(&mut cursor)?;
    cursor.skip_whitespace();
    if !cursor.is_eof() {
        return Err(ParseError::RootNotSingular);
    }
    Ok(value)
}

fn parse_value(cursor: &mut Cursor<'_>) -> Result<Value> {
    match cursor.peek() {
        Some(b't') => literal::parse_literal(cursor, "true", Value::True),
        Some(b'f') => literal::parse_literal(cursor, "false", Value::False),
        Some(b'n') => literal::parse_literal(cursor, "null", Value::Null),
        None => Err(ParseError::ExpectValue),
        Some(_) => number::parse_number(cursor),
    }
}
