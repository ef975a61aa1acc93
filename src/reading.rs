// SENTRA - Streaming telemetry aggregation
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Sensor reading value type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped observation from a device for a given metric.
///
/// Readings are constructed by the ingestion boundary from a validated
/// request (see [`crate::request::ReadingRequest`]) and treated as
/// immutable from then on: the aggregation core only ever receives
/// already-stored sequences and never creates, mutates, or destroys
/// them. The non-empty invariants on `device_id` and `metric` are
/// enforced at ingestion, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Identifier of the device that produced the observation.
    pub device_id: String,

    /// Named quantity being measured (e.g. "temperature").
    ///
    /// Stored case-sensitively; case-insensitive matching happens at
    /// strategy resolution, not in storage.
    pub metric: String,

    /// Observed value.
    pub value: f64,

    /// Observation time, second precision or better.
    pub timestamp: DateTime<Utc>,

    /// Kind of device (e.g. "thermostat"), if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
}

impl Reading {
    /// Create a new reading without a device type.
    pub fn new(
        device_id: impl Into<String>,
        metric: impl Into<String>,
        value: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            metric: metric.into(),
            value,
            timestamp,
            device_type: None,
        }
    }

    /// Attach a device type.
    pub fn with_device_type(mut self, device_type: impl Into<String>) -> Self {
        self.device_type = Some(device_type.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_reading_new() {
        let ts = Utc.timestamp_opt(1_706_745_600, 0).unwrap();
        let reading = Reading::new("thermostat-1", "temperature", 22.5, ts);

        assert_eq!(reading.device_id, "thermostat-1");
        assert_eq!(reading.metric, "temperature");
        assert_eq!(reading.value, 22.5);
        assert_eq!(reading.timestamp, ts);
        assert!(reading.device_type.is_none());
    }

    #[test]
    fn test_reading_with_device_type() {
        let ts = Utc.timestamp_opt(1_706_745_600, 0).unwrap();
        let reading =
            Reading::new("car-ecu-1", "fuel-level", 55.0, ts).with_device_type("vehicle");

        assert_eq!(reading.device_type, Some("vehicle".to_string()));
    }

    #[test]
    fn test_reading_json_roundtrip() {
        let ts = Utc.timestamp_opt(1_706_745_600, 0).unwrap();
        let reading = Reading::new("heartrate-1", "heart-rate", 72.0, ts).with_device_type("wearable");

        let json = serde_json::to_string(&reading).unwrap();
        let parsed: Reading = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, reading);
    }

    #[test]
    fn test_reading_json_omits_missing_device_type() {
        let ts = Utc.timestamp_opt(1_706_745_600, 0).unwrap();
        let reading = Reading::new("thermostat-1", "temperature", 21.0, ts);

        let json = serde_json::to_string(&reading).unwrap();
        assert!(!json.contains("device_type"));
    }
}
