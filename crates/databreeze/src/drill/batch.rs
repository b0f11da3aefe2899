//! Drilling a batch of records.
//!
//! [`drill_many`] always returns one value per record. [`drill`] keeps the
//! caller's shape: a [`Batch::One`] yields [`Drilled::One`], a
//! [`Batch::Many`] yields [`Drilled::Many`].

use databreeze_core::{Key, KeyPath};

use super::driller::Driller;
use crate::node::Node;

/// A single record or an ordered sequence of records.
#[derive(Debug)]
pub enum Batch<'a, R> {
    One(&'a R),
    Many(&'a [R]),
}

impl<R> Clone for Batch<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Batch<'_, R> {}

impl<'a, R> Batch<'a, R> {
    /// The records as a slice; a single record is a one-element slice.
    pub fn records(&self) -> &'a [R] {
        match *self {
            Batch::One(record) => std::slice::from_ref(record),
            Batch::Many(records) => records,
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

impl<'a, R: Node> Batch<'a, R> {
    /// Classify a decoded document: a top-level sequence is a batch of
    /// records, anything else is one record.
    pub fn from_document(document: &'a R) -> Self {
        match document.as_records() {
            Some(records) => Batch::Many(records),
            None => Batch::One(document),
        }
    }
}

impl<'a, R> From<&'a [R]> for Batch<'a, R> {
    fn from(records: &'a [R]) -> Self {
        Batch::Many(records)
    }
}

/// The result of [`drill`], shaped like its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drilled<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Drilled<T> {
    /// Always-a-sequence view.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Drilled::One(value) => vec![value],
            Drilled::Many(values) => values,
        }
    }

    pub fn is_many(&self) -> bool {
        matches!(self, Drilled::Many(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Drilled::One(_) => 1,
            Drilled::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Drilled<U> {
        match self {
            Drilled::One(value) => Drilled::One(f(value)),
            Drilled::Many(values) => Drilled::Many(values.into_iter().map(f).collect()),
        }
    }
}

/// Drill every record with the same path and fallback. The result has the
/// same length and order as `records`.
pub fn drill_many<'a, R: Node>(
    records: &'a [R],
    path: impl Into<KeyPath>,
    fallback: &'a R,
) -> Vec<&'a R> {
    Driller::default().drill_many(records, path, fallback)
}

/// [`drill_many`] with the absent marker (`null`) as the fallback.
pub fn drill_many_or_absent<R: Node>(records: &[R], path: impl Into<KeyPath>) -> Vec<&R> {
    Driller::default().drill_many_or_absent(records, path)
}

/// Look up one top-level key in every record.
pub fn drill_field<'a, R: Node>(
    records: &'a [R],
    key: impl Into<Key>,
    fallback: &'a R,
) -> Vec<&'a R> {
    Driller::default().drill_field(records, key, fallback)
}

/// Shape-preserving drill over a single record or a batch.
pub fn drill<'a, R: Node>(
    batch: impl Into<Batch<'a, R>>,
    path: impl Into<KeyPath>,
    fallback: &'a R,
) -> Drilled<&'a R> {
    Driller::default().drill(batch.into(), path, fallback)
}
