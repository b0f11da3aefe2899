//! A drill handle carrying a [`DrillConfig`].

use databreeze_core::{DrillConfig, Key, KeyPath};
use tracing::trace;

use super::batch::{Batch, Drilled};
use super::scalar::walk;
use crate::node::Node;

/// Counts from one batch drill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrillStats {
    /// Records in the batch.
    pub records: usize,
    /// Records where the full path resolved.
    pub resolved: usize,
    /// Records that got the fallback.
    pub fell_back: usize,
}

impl DrillStats {
    /// Fraction of records that resolved, `1.0` for an empty batch.
    pub fn hit_rate(&self) -> f64 {
        if self.records == 0 {
            return 1.0;
        }
        self.resolved as f64 / self.records as f64
    }
}

/// Drills records under a fixed configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Driller {
    config: DrillConfig,
}

impl Driller {
    pub fn new(config: DrillConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DrillConfig {
        &self.config
    }

    /// `Some(value)` if every key in `path` resolved, else `None`.
    pub fn probe<'a, R: Node>(&self, record: &'a R, path: impl Into<KeyPath>) -> Option<&'a R> {
        walk(record, path.into().as_slice(), self.config.negative_indices)
    }

    /// The value at `path`, or `fallback` at the first key that misses.
    pub fn drill_one<'a, R: Node>(
        &self,
        record: &'a R,
        path: impl Into<KeyPath>,
        fallback: &'a R,
    ) -> &'a R {
        self.probe(record, path).unwrap_or(fallback)
    }

    pub fn drill_one_or_absent<'a, R: Node>(&self, record: &'a R, path: impl Into<KeyPath>) -> &'a R {
        self.drill_one(record, path, R::absent())
    }

    /// One result per record, in input order.
    pub fn drill_many<'a, R: Node>(
        &self,
        records: &'a [R],
        path: impl Into<KeyPath>,
        fallback: &'a R,
    ) -> Vec<&'a R> {
        self.drill_many_with_stats(records, path, fallback).0
    }

    pub fn drill_many_or_absent<'a, R: Node>(
        &self,
        records: &'a [R],
        path: impl Into<KeyPath>,
    ) -> Vec<&'a R> {
        self.drill_many(records, path, R::absent())
    }

    /// [`drill_many`](Self::drill_many) plus how many records fell back.
    pub fn drill_many_with_stats<'a, R: Node>(
        &self,
        records: &'a [R],
        path: impl Into<KeyPath>,
        fallback: &'a R,
    ) -> (Vec<&'a R>, DrillStats) {
        let path = path.into();
        let mut stats = DrillStats {
            records: records.len(),
            ..DrillStats::default()
        };

        let values = records
            .iter()
            .map(|record| match walk(record, path.as_slice(), self.config.negative_indices) {
                Some(value) => {
                    stats.resolved += 1;
                    value
                }
                None => {
                    stats.fell_back += 1;
                    fallback
                }
            })
            .collect();

        if self.config.trace_batches {
            trace!(
                path = %path,
                records = stats.records,
                resolved = stats.resolved,
                fell_back = stats.fell_back,
                "drilled batch"
            );
        }
        (values, stats)
    }

    /// Look up a single top-level key in every record.
    pub fn drill_field<'a, R: Node>(
        &self,
        records: &'a [R],
        key: impl Into<Key>,
        fallback: &'a R,
    ) -> Vec<&'a R> {
        let key: Key = key.into();
        self.drill_many(records, key, fallback)
    }

    /// Shape-preserving drill: one record in, one value out; a batch in, a
    /// `Vec` out.
    pub fn drill<'a, R: Node>(
        &self,
        batch: Batch<'a, R>,
        path: impl Into<KeyPath>,
        fallback: &'a R,
    ) -> Drilled<&'a R> {
        match batch {
            Batch::One(record) => Drilled::One(self.drill_one(record, path, fallback)),
            Batch::Many(records) => Drilled::Many(self.drill_many(records, path, fallback)),
        }
    }
}
