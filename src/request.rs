// SENTRA - Streaming telemetry aggregation
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Inbound reading requests and ingestion validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TelemetryError};
use crate::reading::Reading;

/// Raw inbound observation, as submitted by a device or collector.
///
/// A request becomes a [`Reading`] only through
/// [`ReadingRequest::into_reading`], which enforces the invariants the
/// rest of the library relies on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingRequest {
    /// Identifier of the submitting device.
    pub device_id: String,
    /// Metric name.
    pub metric: String,
    /// Observed value.
    pub value: f64,
    /// Observation time.
    pub timestamp: DateTime<Utc>,
    /// Kind of device, if reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
}

impl ReadingRequest {
    /// Validate and convert into a reading.
    ///
    /// Rejects blank identifiers and non-finite values; everything
    /// downstream of ingestion may assume these invariants hold.
    pub fn into_reading(self) -> Result<Reading> {
        if self.device_id.trim().is_empty() {
            return Err(TelemetryError::InvalidReading(
                "device_id cannot be blank".to_string(),
            ));
        }
        if self.metric.trim().is_empty() {
            return Err(TelemetryError::InvalidReading(
                "metric cannot be blank".to_string(),
            ));
        }
        if !self.value.is_finite() {
            return Err(TelemetryError::InvalidReading(format!(
                "value must be finite, got {}",
                self.value
            )));
        }

        let mut reading = Reading::new(self.device_id, self.metric, self.value, self.timestamp);
        if let Some(device_type) = self.device_type {
            reading = reading.with_device_type(device_type);
        }
        Ok(reading)
    }
}
