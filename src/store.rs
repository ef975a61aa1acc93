// SENTRA - Streaming telemetry aggregation
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Storage collaborator: the reading persistence contract and the
//! in-memory implementation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::filter::filter_by_range;
use crate::reading::Reading;

/// Persistence contract the query boundary consumes.
///
/// Implementations make no ordering guarantee on returned sequences;
/// the aggregation core computes order-independent statistics (the
/// median sorts internally), so none is needed.
pub trait ReadingStore {
    /// Persist one reading.
    fn insert(&mut self, reading: Reading);

    /// All readings for a device/metric pair.
    ///
    /// The metric match is exact: storage is case-sensitive, and
    /// case-insensitive matching is a strategy-resolution concern.
    fn find(&self, device_id: &str, metric: &str) -> Vec<Reading>;

    /// Readings for a device/metric pair within `[from, to]`, both
    /// bounds inclusive.
    fn find_in_range(
        &self,
        device_id: &str,
        metric: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Vec<Reading>;
}

/// In-memory reading store keyed by (device, metric).
///
/// Insertion order is preserved per series.
#[derive(Debug, Default)]
pub struct MemoryStore {
    series: HashMap<(String, String), Vec<Reading>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored readings.
    pub fn len(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    /// Check whether the store holds no readings.
    pub fn is_empty(&self) -> bool {
        self.series.values().all(Vec::is_empty)
    }

    /// Number of distinct (device, metric) series.
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Drop all stored readings.
    pub fn clear(&mut self) {
        self.series.clear();
    }
}

impl ReadingStore for MemoryStore {
    fn insert(&mut self, reading: Reading) {
        let key = (reading.device_id.clone(), reading.metric.clone());
        self.series.entry(key).or_default().push(reading);
    }

    fn find(&self, device_id: &str, metric: &str) -> Vec<Reading> {
        self.series
            .get(&(device_id.to_string(), metric.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    fn find_in_range(
        &self,
        device_id: &str,
        metric: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Vec<Reading> {
        match self.series.get(&(device_id.to_string(), metric.to_string())) {
            Some(readings) => filter_by_range(readings, from, to),
            None => Vec::new(),
        }
    }
}
