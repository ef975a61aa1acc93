// SENTRA - Streaming telemetry aggregation
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Query boundary: orchestrates storage, filtering, and strategy
//! dispatch.
//!
//! The [`TelemetryService`] owns a [`ReadingStore`] and a
//! [`StrategyRegistry`] and exposes the ingest/query surface callers
//! use.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use sentra::{MemoryStore, ReadingRequest, StrategyRegistry, TelemetryService};
//!
//! let mut service = TelemetryService::new(
//!     MemoryStore::new(),
//!     StrategyRegistry::with_default_strategies(),
//! );
//!
//! service
//!     .ingest(ReadingRequest {
//!         device_id: "thermostat-1".to_string(),
//!         metric: "temperature".to_string(),
//!         value: 22.5,
//!         timestamp: Utc::now(),
//!         device_type: Some("thermostat".to_string()),
//!     })
//!     .unwrap();
//!
//! let summary = service.stats("thermostat-1", "temperature").unwrap();
//! assert_eq!(summary.min, 22.5);
//! ```

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::error::{Result, TelemetryError};
use crate::filter::filter_by_range;
use crate::reading::Reading;
use crate::registry::{SharedStrategy, StrategyRegistry};
use crate::request::ReadingRequest;
use crate::store::ReadingStore;
use crate::summary::MetricSummary;

/// High-level API over a reading store and a strategy registry.
///
/// Two empty-result outcomes are deliberately kept distinct and must
/// stay that way: a pair with nothing in storage is a
/// [`TelemetryError::NoData`] error, while a window that matches none
/// of the stored readings yields the defined all-zero summary.
/// Consumers rely on telling the two apart.
pub struct TelemetryService<S: ReadingStore> {
    store: S,
    registry: StrategyRegistry,
}

impl<S: ReadingStore> TelemetryService<S> {
    /// Create a service over the given store and registry.
    pub fn new(store: S, registry: StrategyRegistry) -> Self {
        Self { store, registry }
    }

    /// Validate and persist one inbound reading.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::InvalidReading`] if the request fails
    /// validation.
    pub fn ingest(&mut self, request: ReadingRequest) -> Result<()> {
        let reading = request.into_reading()?;
        debug!(
            "ingesting reading for device '{}' metric '{}'",
            reading.device_id, reading.metric
        );
        self.store.insert(reading);
        Ok(())
    }

    /// All stored readings for a device/metric pair.
    pub fn readings(&self, device_id: &str, metric: &str) -> Vec<Reading> {
        self.store.find(device_id, metric)
    }

    /// Stored readings within `[from, to]`, both bounds inclusive.
    pub fn readings_in_range(
        &self,
        device_id: &str,
        metric: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Vec<Reading> {
        self.store.find_in_range(device_id, metric, from, to)
    }

    /// Summary statistics over every stored reading for the pair.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::NoData`] when storage holds nothing
    /// for the pair (aggregation is not invoked on empty storage), and
    /// [`TelemetryError::UnsupportedMetric`] when no strategy is
    /// registered for the metric.
    pub fn stats(&self, device_id: &str, metric: &str) -> Result<MetricSummary> {
        let readings = self.store.find(device_id, metric);
        if readings.is_empty() {
            warn!("no data for device '{}' metric '{}'", device_id, metric);
            return Err(TelemetryError::NoData {
                device_id: device_id.to_string(),
                metric: metric.to_string(),
            });
        }

        let strategy = self.resolve(metric)?;
        Ok(strategy.aggregate(metric, &readings))
    }

    /// Summary statistics restricted to the inclusive window
    /// `[from, to]`.
    ///
    /// Storage must hold at least one reading for the pair; a window
    /// that matches none of them is not an error and yields the
    /// defined all-zero summary.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::NoData`] when storage holds nothing
    /// for the pair at all, and [`TelemetryError::UnsupportedMetric`]
    /// when no strategy is registered for the metric.
    pub fn stats_in_range(
        &self,
        device_id: &str,
        metric: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<MetricSummary> {
        let readings = self.store.find(device_id, metric);
        if readings.is_empty() {
            warn!("no data for device '{}' metric '{}'", device_id, metric);
            return Err(TelemetryError::NoData {
                device_id: device_id.to_string(),
                metric: metric.to_string(),
            });
        }

        let filtered = filter_by_range(&readings, from, to);
        debug!(
            "{} of {} readings in range for device '{}' metric '{}'",
            filtered.len(),
            readings.len(),
            device_id,
            metric
        );

        let strategy = self.resolve(metric)?;
        Ok(strategy.aggregate(metric, &filtered))
    }

    /// Access the strategy registry.
    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn resolve(&self, metric: &str) -> Result<&SharedStrategy> {
        self.registry
            .resolve(metric)
            .ok_or_else(|| TelemetryError::UnsupportedMetric(metric.to_string()))
    }
}
