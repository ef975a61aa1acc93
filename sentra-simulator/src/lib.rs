// SENTRA Simulator - Synthetic sensor fleet generator
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! # SENTRA Simulator
//!
//! Synthetic sensor fleet generator for the SENTRA aggregation engine.
//!
//! The simulator emits reproducible, timestamped reading requests for
//! a configurable set of device profiles and can drive them straight
//! into a [`sentra::TelemetryService`] — useful for exercising the
//! ingestion and query paths without real hardware.
//!
//! ## Quick Start
//!
//! ```rust
//! use sentra::{MemoryStore, StrategyRegistry, TelemetryService};
//! use sentra_simulator::{Simulator, SimulatorConfig};
//!
//! let config = SimulatorConfig::new().with_max_records(30).with_seed(7);
//! let mut simulator = Simulator::with_default_fleet(config);
//!
//! let mut service = TelemetryService::new(
//!     MemoryStore::new(),
//!     StrategyRegistry::with_default_strategies(),
//! );
//!
//! let ingested = simulator.run_into(&mut service).unwrap();
//! assert_eq!(ingested, 30);
//! ```
//!
//! ## Modules
//!
//! - [`config`]: run configuration (interval, record budget, seed)
//! - [`profiles`]: device profiles and the stock fleet
//! - [`simulator`]: the simulation loop and JSONL export

pub mod config;
pub mod profiles;
pub mod simulator;

// Re-exports for convenient access
pub use config::SimulatorConfig;
pub use profiles::{default_fleet, DeviceProfile};
pub use simulator::{SimulationLog, Simulator, SimulatorError};
