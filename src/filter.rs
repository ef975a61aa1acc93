// SENTRA - Streaming telemetry aggregation
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Time-range filtering for reading sequences.

use chrono::{DateTime, Utc};

use crate::reading::Reading;

/// Narrow `readings` to those with `from <= timestamp <= to`.
///
/// Both bounds are inclusive and the original relative order is
/// preserved. Inverted bounds (`from > to`) are not an error; the
/// result is simply empty since no timestamp can satisfy both. Pure
/// and total: an empty input yields an empty output.
pub fn filter_by_range(
    readings: &[Reading],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Vec<Reading> {
    readings
        .iter()
        .filter(|r| r.timestamp >= from && r.timestamp <= to)
        .cloned()
        .collect()
}
