// SENTRA - Streaming telemetry aggregation
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Median calculation over reading values.

use crate::reading::Reading;

/// Median of the values carried by `readings`.
///
/// Values are copied out and sorted ascending internally, so input
/// order is irrelevant and duplicates are fine. An empty input yields
/// 0.0; an odd count yields the exact middle element; an even count
/// yields the arithmetic mean of the two middle elements.
pub fn median(readings: &[Reading]) -> f64 {
    let mut values: Vec<f64> = readings.iter().map(|r| r.value).collect();
    values.sort_by(f64::total_cmp);

    let n = values.len();
    if n == 0 {
        return 0.0;
    }

    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}
