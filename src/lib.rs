//! # SENTRA - Streaming Telemetry Aggregation
//!
//! An aggregation engine for timestamped IoT sensor readings: pluggable
//! strategy dispatch per metric, min/max/avg/median statistics, and
//! inclusive time-range filtering.
//!
//! ## Key Features
//!
//! - **Strategy dispatch**: metric name resolves to a pluggable
//!   aggregation strategy, case-insensitively
//! - **Summary statistics**: minimum, maximum, arithmetic mean, and
//!   median over a reading sequence
//! - **Time-range filtering**: inclusive-bounds window narrowing before
//!   aggregation
//! - **Distinct empty outcomes**: "nothing recorded" is an error,
//!   "nothing in the window" is a defined all-zero summary
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use sentra::{MemoryStore, ReadingRequest, StrategyRegistry, TelemetryService};
//!
//! // Build the registry once at startup and hand it to the service.
//! let registry = StrategyRegistry::with_default_strategies();
//! let mut service = TelemetryService::new(MemoryStore::new(), registry);
//!
//! // Ingest validated readings
//! for value in [22.5, 23.1, 22.8] {
//!     service
//!         .ingest(ReadingRequest {
//!             device_id: "thermostat-1".to_string(),
//!             metric: "temperature".to_string(),
//!             value,
//!             timestamp: Utc::now(),
//!             device_type: Some("thermostat".to_string()),
//!         })
//!         .unwrap();
//! }
//!
//! // Query aggregated statistics
//! let summary = service.stats("thermostat-1", "temperature").unwrap();
//! assert_eq!(summary.min, 22.5);
//! assert_eq!(summary.max, 23.1);
//! assert_eq!(summary.median, 22.8);
//! ```
//!
//! ## Modules
//!
//! - [`reading`]: the immutable sensor observation value type
//! - [`request`]: inbound requests and ingestion validation
//! - [`summary`]: the aggregation result value type
//! - [`filter`]: inclusive time-range filtering
//! - [`median`]: median calculation
//! - [`strategy`]: the pluggable aggregation capability and its
//!   statistical variant
//! - [`registry`]: metric-name-to-strategy lookup
//! - [`store`]: the storage contract and in-memory implementation
//! - [`service`]: the ingest/query boundary

// Modules
pub mod error;
pub mod filter;
pub mod median;
pub mod reading;
pub mod registry;
pub mod request;
pub mod service;
pub mod store;
pub mod strategy;
pub mod summary;

// Re-exports for convenient access
pub use error::{Result, TelemetryError};
pub use filter::filter_by_range;
pub use median::median;
pub use reading::Reading;
pub use registry::{SharedStrategy, StrategyRegistry};
pub use request::ReadingRequest;
pub use service::TelemetryService;
pub use store::{MemoryStore, ReadingStore};
pub use strategy::{AggregationStrategy, StatisticalStrategy};
pub use summary::MetricSummary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_basic_aggregation() {
        let mut service = TelemetryService::new(
            MemoryStore::new(),
            StrategyRegistry::with_default_strategies(),
        );

        service
            .ingest(ReadingRequest {
                device_id: "dev-1".to_string(),
                metric: "humidity".to_string(),
                value: 45.0,
                timestamp: Utc.timestamp_opt(1_706_745_600, 0).unwrap(),
                device_type: None,
            })
            .unwrap();

        let summary = service.stats("dev-1", "humidity").unwrap();
        assert_eq!(summary.min, 45.0);
        assert_eq!(summary.max, 45.0);
    }
}
