use crate::decode::cursor::Cursor;
use crate::{ParseError, Result, Value};

/// DFA states for the JSON number grammar
/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    Sign,
    LeadingZero,
    IntDigits,
    FractionStart,
    FractionDigits,
    ExpStart,
    ExpSign,
    ExpDigits,
}

impl State {
    /// Transition on one byte. `None` means the byte has no outgoing edge
    /// from this state. A digit after a leading zero has no edge either, so
    /// `01` is rejected at the grammar level.
    fn step(self, byte: u8) -> Option<State> {
        match (self, byte) {
            (State::Start, b'-') => Some(State::Sign),
            (State::Start | State::Sign, b'0') => Some(State::LeadingZero),
            (State::Start | State::Sign, b'1'..=b'9') => Some(State::IntDigits),
            (State::LeadingZero | State::IntDigits, b'.') => Some(State::FractionStart),
            (State::LeadingZero | State::IntDigits | State::FractionDigits, b'e' | b'E') => {
                Some(State::ExpStart)
            }
            (State::IntDigits, b'0'..=b'9') => Some(State::IntDigits),
            (State::FractionStart | State::FractionDigits, b'0'..=b'9') => {
                Some(State::FractionDigits)
            }
            (State::ExpStart, b'+' | b'-') => Some(State::ExpSign),
            (State::ExpStart | State::ExpSign | State::ExpDigits, b'0'..=b'9') => {
                Some(State::ExpDigits)
            }
            _ => None,
        }
    }

    /// Non-accepting states are the "expected more characters" conditions:
    /// bare sign, bare fraction dot, bare exponent marker or sign.
    fn is_accepting(self) -> bool {
        matches!(
            self,
            State::LeadingZero | State::IntDigits | State::FractionDigits | State::ExpDigits
        )
    }
}

/// End-of-number characters. Not consumed by the scan.
fn is_terminator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Validate a number at the cursor and convert the matched span to an f64.
///
/// One forward scan drives the DFA until end-of-input or whitespace; the
/// validated span is then handed to the standard float parser, which accepts
/// exactly the forms the DFA let through. A magnitude that overflows to
/// infinity is reported as [`ParseError::NumberTooBig`].
pub(crate) fn parse_number(cursor: &mut Cursor<'_>) -> Result<Value> {
    let start = cursor.offset();
    let mut state = State::Start;
    while let Some(byte) = cursor.peek() {
        if is_terminator(byte) {
            break;
        }
        state = state.step(byte).ok_or(ParseError::InvalidValue)?;
        cursor.bump();
    }
    if !state.is_accepting() {
        return Err(ParseError::InvalidValue);
    }
    let number: f64 = cursor
        .slice(start)
        .parse()
        .map_err(|_| ParseError::InvalidValue)?;
    if number.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    Ok(Value::Number(number))
}
