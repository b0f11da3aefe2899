//! Resolving one key path against one record.

use databreeze_core::{Key, KeyPath};

use super::driller::Driller;
use crate::node::Node;

/// Walk `keys` from `record`, stopping at the first step that cannot be
/// taken. Keys after a failed step are never looked at.
pub(crate) fn walk<'a, R: Node>(
    record: &'a R,
    keys: &[Key],
    negative_indices: bool,
) -> Option<&'a R> {
    keys.iter()
        .try_fold(record, |cursor, key| cursor.child_with(key, negative_indices))
}

/// Resolve `path` against `record`: `Some(value)` if every key was found,
/// `None` at the first key that was not. An empty path yields `record`.
pub fn probe<R: Node>(record: &R, path: impl Into<KeyPath>) -> Option<&R> {
    Driller::default().probe(record, path)
}

/// Resolve `path` against `record`, or return `fallback` if any step fails.
pub fn drill_one<'a, R: Node>(record: &'a R, path: impl Into<KeyPath>, fallback: &'a R) -> &'a R {
    Driller::default().drill_one(record, path, fallback)
}

/// [`drill_one`] with the absent marker (`null`) as the fallback.
pub fn drill_one_or_absent<R: Node>(record: &R, path: impl Into<KeyPath>) -> &R {
    Driller::default().drill_one_or_absent(record, path)
}
