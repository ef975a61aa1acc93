// SENTRA - Streaming telemetry aggregation
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Aggregated metric summary value type.

use serde::{Deserialize, Serialize};

/// Result of aggregating a set of readings for one metric.
///
/// Constructed fresh per aggregation call; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Metric name, echoed verbatim from the request.
    pub metric: String,
    /// Minimum value in the input sequence.
    pub min: f64,
    /// Maximum value in the input sequence.
    pub max: f64,
    /// Arithmetic mean of the input sequence.
    pub avg: f64,
    /// Median of the input sequence.
    pub median: f64,
}

impl MetricSummary {
    /// Summary for an empty input sequence: all four statistics are 0.0.
    ///
    /// The all-zero result is a defined default, not an error; existing
    /// consumers rely on it to represent "data exists but none matched
    /// the window".
    pub fn empty(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            min: 0.0,
            max: 0.0,
            avg: 0.0,
            median: 0.0,
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serialize to compact JSON string.
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let summary = MetricSummary::empty("temperature");

        assert_eq!(summary.metric, "temperature");
        assert_eq!(summary.min, 0.0);
        assert_eq!(summary.max, 0.0);
        assert_eq!(summary.avg, 0.0);
        assert_eq!(summary.median, 0.0);
    }

    #[test]
    fn test_empty_summary_echoes_metric_verbatim() {
        // Mixed case is preserved; lower-casing is a lookup concern.
        let summary = MetricSummary::empty("Temperature");
        assert_eq!(summary.metric, "Temperature");
    }

    #[test]
    fn test_json_roundtrip() {
        let summary = MetricSummary {
            metric: "humidity".to_string(),
            min: 40.0,
            max: 60.0,
            avg: 50.5,
            median: 51.0,
        };

        let json = summary.to_json().unwrap();
        let parsed = MetricSummary::from_json(&json).unwrap();

        assert_eq!(parsed, summary);
    }

    #[test]
    fn test_compact_json() {
        let summary = MetricSummary::empty("temperature");

        let compact = summary.to_json_compact().unwrap();
        let pretty = summary.to_json().unwrap();

        assert!(compact.len() < pretty.len());
    }
}
