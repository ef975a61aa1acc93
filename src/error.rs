//! Error types for SENTRA
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias for SENTRA operations
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Main error type for telemetry operations
///
/// The aggregation core itself has exactly one conceptual error,
/// [`TelemetryError::UnsupportedMetric`]; the registry reports absence
/// and the query boundary turns it into this error. The remaining
/// variants belong to the boundary layers: [`TelemetryError::NoData`]
/// is the query boundary's policy for empty storage, and
/// [`TelemetryError::InvalidReading`] is an ingestion validation
/// failure. Filter, median, and strategy computation are total
/// functions and never produce errors.
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// No strategy is registered for the requested metric
    #[error("Unsupported metric: {0}")]
    UnsupportedMetric(String),

    /// Storage holds no readings for the device/metric pair
    #[error("No data found for device '{device_id}' and metric '{metric}'")]
    NoData {
        /// Device the query asked for
        device_id: String,
        /// Metric the query asked for
        metric: String,
    },

    /// Inbound reading failed validation
    #[error("Invalid reading: {0}")]
    InvalidReading(String),
}
