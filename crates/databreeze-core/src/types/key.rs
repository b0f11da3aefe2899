//! A single step of a key path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One key in a [`KeyPath`](super::KeyPath).
///
/// `Field` looks up a mapping entry by name. `Index` looks up a sequence
/// position; negative values count from the end. Deserializes untagged, so a
/// JSON/TOML string becomes a `Field` and an integer becomes an `Index`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// Named entry of a mapping.
    Field(String),
    /// Position in a sequence.
    Index(i64),
}

impl Key {
    /// Returns the field name, if this is a `Field`.
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Key::Field(name) => Some(name),
            Key::Index(_) => None,
        }
    }

    /// Returns the index, if this is an `Index`.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Field(_) => None,
            Key::Index(index) => Some(*index),
        }
    }

    /// True for an `Index` that counts from the end of a sequence.
    pub fn is_negative_index(&self) -> bool {
        matches!(self, Key::Index(index) if *index < 0)
    }
}

/// Map a possibly negative index onto `0..len`.
///
/// `-1` is the last element unless `allow_negative` is off, in which case a
/// negative index never resolves. Returns `None` when the position falls
/// outside the sequence in either direction.
pub fn resolve_index(index: i64, len: usize, allow_negative: bool) -> Option<usize> {
    if index >= 0 {
        let position = usize::try_from(index).ok()?;
        (position < len).then_some(position)
    } else if !allow_negative {
        None
    } else {
        let back = usize::try_from(index.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Field(name) => f.write_str(name),
            Key::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Field(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Field(name)
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Key::Field(name.clone())
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Key::Index(i64::from(index))
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        // Positions past i64::MAX can never exist in memory; saturate.
        Key::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}
