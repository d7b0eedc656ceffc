/// A parsed JSON value restricted to literals and numbers.
///
/// `True` and `False` are separate variants so the tag set mirrors the JSON
/// literals one-for-one. The numeric payload exists only on `Number`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Null,
    True,
    False,
    Number(f64),
}

/// Discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    True,
    False,
    Number,
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::True => Kind::True,
            Value::False => Kind::False,
            Value::Number(_) => Kind::Number,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric payload of a `Number` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a `Number`. Calling this on another variant
    /// is a contract violation, not a recoverable condition; use
    /// [`as_number`](Self::as_number) when the kind is not known.
    pub fn number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => panic!("number() called on a {:?} value", other.kind()),
        }
    }
}
