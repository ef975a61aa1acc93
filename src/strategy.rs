// SENTRA - Streaming telemetry aggregation
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Aggregation strategies.
//!
//! [`AggregationStrategy`] is the pluggable capability behind metric
//! aggregation: each variant declares the metric names it handles and
//! turns a sequence of readings into a [`MetricSummary`]. New variants
//! (e.g. a categorical-mode strategy) implement the same trait and plug
//! into the registry without touching call sites.

use crate::median::median;
use crate::reading::Reading;
use crate::summary::MetricSummary;

/// Pluggable aggregation computation for one or more metrics.
pub trait AggregationStrategy {
    /// Aggregate `readings` for `metric`.
    ///
    /// The caller applies any time-window filtering before this call.
    /// An empty sequence yields the all-zero default summary rather
    /// than an error. The metric name is echoed verbatim in the result,
    /// regardless of how registry lookup matched it.
    fn aggregate(&self, metric: &str, readings: &[Reading]) -> MetricSummary;

    /// Fixed set of metric names this variant handles.
    ///
    /// The set does not change at runtime; the registry reads it once
    /// at construction.
    fn supported_metrics(&self) -> &[&str];
}

/// Statistical strategy: min, max, arithmetic mean, and median.
///
/// Handles the continuous numeric metrics (temperature, humidity).
#[derive(Debug, Default, Clone, Copy)]
pub struct StatisticalStrategy;

impl StatisticalStrategy {
    /// Create a new statistical strategy.
    pub fn new() -> Self {
        Self
    }
}

impl AggregationStrategy for StatisticalStrategy {
    fn aggregate(&self, metric: &str, readings: &[Reading]) -> MetricSummary {
        if readings.is_empty() {
            return MetricSummary::empty(metric);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for reading in readings {
            min = min.min(reading.value);
            max = max.max(reading.value);
            sum += reading.value;
        }

        MetricSummary {
            metric: metric.to_string(),
            min,
            max,
            avg: sum / readings.len() as f64,
            median: median(readings),
        }
    }

    fn supported_metrics(&self) -> &[&str] {
        &["temperature", "humidity"]
    }
}
