// SENTRA Simulator - Configuration
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Simulation run configuration.

use serde::{Deserialize, Serialize};

/// Simulator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Master switch; a disabled simulator emits nothing.
    pub enabled: bool,
    /// Interval between ticks in milliseconds.
    pub interval_ms: u64,
    /// Total number of readings to emit before stopping.
    pub max_records: usize,
    /// Occasionally emit out-of-band spike values.
    pub allow_spikes: bool,
    /// Start timestamp in epoch milliseconds.
    pub start_time_ms: i64,
    /// Random seed for reproducibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 1000,
            max_records: 100,
            allow_spikes: false,
            start_time_ms: 1_706_745_600_000, // 2024-02-01 00:00:00 UTC
            seed: None,
        }
    }
}

impl SimulatorConfig {
    /// Create a new simulator config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tick interval in milliseconds.
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Set the total record budget.
    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    /// Enable or disable spike injection.
    pub fn with_spikes(mut self, allow_spikes: bool) -> Self {
        self.allow_spikes = allow_spikes;
        self
    }

    /// Set the start timestamp in epoch milliseconds.
    pub fn with_start_time_ms(mut self, start_time_ms: i64) -> Self {
        self.start_time_ms = start_time_ms;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Turn the simulator off.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
