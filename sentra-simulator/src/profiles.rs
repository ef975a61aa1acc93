// SENTRA Simulator - Device profiles
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Device profiles for the simulated fleet.

use serde::{Deserialize, Serialize};

/// One simulated device emitting a single metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Device identifier.
    pub device_id: String,
    /// Device kind (e.g. "thermostat").
    pub device_type: String,
    /// Metric the device reports.
    pub metric: String,
    /// Lower bound of the normal operating range.
    pub min: f64,
    /// Upper bound of the normal operating range.
    pub max: f64,
    /// Standard deviation of added Gaussian noise.
    pub noise_std: f64,
}

impl DeviceProfile {
    /// Create a new profile without noise.
    pub fn new(device_id: &str, device_type: &str, metric: &str, min: f64, max: f64) -> Self {
        Self {
            device_id: device_id.to_string(),
            device_type: device_type.to_string(),
            metric: metric.to_string(),
            min,
            max,
            noise_std: 0.0,
        }
    }

    /// Add Gaussian noise to the sensor.
    pub fn with_noise(mut self, std: f64) -> Self {
        self.noise_std = std;
        self
    }
}

/// Stock three-device fleet: a thermostat, a wearable, and a vehicle
/// ECU.
pub fn default_fleet() -> Vec<DeviceProfile> {
    vec![
        DeviceProfile::new("thermostat-1", "thermostat", "temperature", 20.0, 30.0),
        DeviceProfile::new("heartrate-1", "wearable", "heart-rate", 60.0, 100.0),
        DeviceProfile::new("car-ecu-1", "vehicle", "fuel-level", 10.0, 80.0),
    ]
}
