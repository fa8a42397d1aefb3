//! Leaf value types delivered to the decode callback.

use alloc::string::String;

/// A decoded JSON leaf value.
///
/// Only scalars appear here: containers are addressed through paths and never
/// receive a callback of their own. Numbers decode to [`Integer`] when the
/// source had no fractional part and to [`Float`] otherwise.
///
/// [`Integer`]: Value::Integer
/// [`Float`]: Value::Float
///
/// # Examples
///
/// ```
/// use jsonstream::Value;
///
/// let v = Value::from("hi");
/// assert_eq!(v.as_str(), Some("hi"));
/// assert_eq!(Value::from(42).as_integer(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl Value {
    /// Returns the string content if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Integer`].
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float if this is a [`Value::Float`].
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns `true` if this is [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}
