//! Ordered key sequences and the dotted path syntax.
//!
//! `contact.phone`, `items[0].name` and `rows[-1]` all parse into a
//! [`KeyPath`]. Bare keys and key collections convert with `From`, so a
//! single key is the same thing as a one-element path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::key::Key;
use crate::errors::PathError;

/// Most drills are a handful of keys deep.
type Keys = SmallVec<[Key; 4]>;

/// An ordered descent through nested records, resolved left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath(Keys);

impl KeyPath {
    /// The empty path. Drilling with it returns the record itself.
    pub fn new() -> Self {
        Self(Keys::new())
    }

    /// Parse the dotted syntax: fields separated by `.`, each optionally
    /// followed by one or more `[index]` suffixes. A segment may be a bare
    /// index (`[0].name`). The empty string is the empty path.
    pub fn parse(input: &str) -> Result<Self, PathError> {
        let mut keys = Keys::new();
        if input.is_empty() {
            return Ok(Self(keys));
        }

        let mut offset = 0;
        for segment in input.split('.') {
            parse_segment(segment, offset, &mut keys)?;
            offset += segment.len() + 1;
        }
        Ok(Self(keys))
    }

    /// Append a key.
    pub fn push(&mut self, key: impl Into<Key>) {
        self.0.push(key.into());
    }

    /// Return a new path with `key` appended.
    pub fn child(&self, key: impl Into<Key>) -> Self {
        let mut path = self.clone();
        path.push(key);
        path
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Key] {
        &self.0
    }
}

fn parse_segment(segment: &str, offset: usize, keys: &mut Keys) -> Result<(), PathError> {
    let (name, mut rest) = match segment.find('[') {
        Some(at) => segment.split_at(at),
        None => (segment, ""),
    };

    if let Some(at) = name.find(']') {
        return Err(PathError::UnexpectedCharacter {
            ch: ']',
            position: offset + at,
        });
    }
    if name.is_empty() && rest.is_empty() {
        return Err(PathError::EmptySegment { position: offset });
    }
    if !name.is_empty() {
        keys.push(Key::Field(name.to_owned()));
    }

    let mut cursor = offset + name.len();
    while !rest.is_empty() {
        let Some(body) = rest.strip_prefix('[') else {
            let ch = rest.chars().next().unwrap_or_default();
            return Err(PathError::UnexpectedCharacter {
                ch,
                position: cursor,
            });
        };
        let Some(close) = body.find(']') else {
            return Err(PathError::UnclosedBracket { position: cursor });
        };

        let digits = &body[..close];
        let index = digits
            .trim()
            .parse::<i64>()
            .map_err(|_| PathError::InvalidIndex {
                index: digits.to_owned(),
                position: cursor + 1,
            })?;
        keys.push(Key::Index(index));

        // '[' + digits + ']'
        cursor += close + 2;
        rest = &body[close + 1..];
    }
    Ok(())
}

impl FromStr for KeyPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Writes the dotted syntax without escaping. Field names that are empty or
/// contain `.`, `[` or `]` do not parse back to the same path.
impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 && matches!(key, Key::Field(_)) {
                f.write_str(".")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<Key>> FromIterator<K> for KeyPath {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl AsRef<[Key]> for KeyPath {
    fn as_ref(&self) -> &[Key] {
        &self.0
    }
}

// A bare key is a one-element path.

impl From<Key> for KeyPath {
    fn from(key: Key) -> Self {
        let mut keys = Keys::new();
        keys.push(key);
        Self(keys)
    }
}

impl From<&str> for KeyPath {
    fn from(name: &str) -> Self {
        Key::from(name).into()
    }
}

impl From<String> for KeyPath {
    fn from(name: String) -> Self {
        Key::from(name).into()
    }
}

impl From<i64> for KeyPath {
    fn from(index: i64) -> Self {
        Key::from(index).into()
    }
}

impl From<i32> for KeyPath {
    fn from(index: i32) -> Self {
        Key::from(index).into()
    }
}

impl From<usize> for KeyPath {
    fn from(index: usize) -> Self {
        Key::from(index).into()
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

impl<K: Into<Key>> From<Vec<K>> for KeyPath {
    fn from(keys: Vec<K>) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Into<Key>, const N: usize> From<[K; N]> for KeyPath {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Into<Key> + Clone> From<&[K]> for KeyPath {
    fn from(keys: &[K]) -> Self {
        keys.iter().cloned().collect()
    }
}
