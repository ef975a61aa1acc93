// SENTRA Simulator - Core simulation loop
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Core simulation loop.
//!
//! The [`Simulator`] walks a simulated clock forward tick by tick,
//! emitting one reading request per device profile until the record
//! budget is exhausted, and can drive the generated requests straight
//! into a [`TelemetryService`].

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use sentra::{ReadingRequest, ReadingStore, TelemetryService};
use thiserror::Error;

use crate::config::SimulatorConfig;
use crate::profiles::DeviceProfile;

/// Simulator error types.
#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Ingestion rejected request: {0}")]
    Ingest(#[from] sentra::TelemetryError),

    #[error("Timestamp out of range: {0} ms")]
    TimestampOutOfRange(i64),
}

/// Synthetic reading generator for a fleet of device profiles.
pub struct Simulator {
    config: SimulatorConfig,
    profiles: Vec<DeviceProfile>,
    rng: StdRng,
    emitted: usize,
    tick: u64,
}

impl Simulator {
    /// Create a simulator over the given profiles.
    pub fn new(config: SimulatorConfig, profiles: Vec<DeviceProfile>) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            profiles,
            rng,
            emitted: 0,
            tick: 0,
        }
    }

    /// Simulator over the stock fleet.
    pub fn with_default_fleet(config: SimulatorConfig) -> Self {
        Self::new(config, crate::profiles::default_fleet())
    }

    /// Number of readings emitted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Whether the record budget is exhausted.
    pub fn finished(&self) -> bool {
        self.emitted >= self.config.max_records
    }

    /// Produce the next batch of requests, one per profile.
    ///
    /// Returns an empty batch when the simulator is disabled or the
    /// record budget is exhausted, and a truncated batch when the
    /// budget runs out mid-tick.
    pub fn next_batch(&mut self) -> Result<Vec<ReadingRequest>, SimulatorError> {
        if !self.config.enabled || self.finished() {
            return Ok(Vec::new());
        }

        let timestamp = self.tick_timestamp()?;
        let remaining = self.config.max_records - self.emitted;
        let allow_spikes = self.config.allow_spikes;

        let mut batch = Vec::new();
        for profile in &self.profiles {
            if batch.len() >= remaining {
                break;
            }
            let value = Self::sample_value(&mut self.rng, profile, allow_spikes);
            batch.push(ReadingRequest {
                device_id: profile.device_id.clone(),
                metric: profile.metric.clone(),
                value,
                timestamp,
                device_type: Some(profile.device_type.clone()),
            });
        }

        self.tick += 1;
        self.emitted += batch.len();
        debug!("tick {} emitted {} requests", self.tick, batch.len());
        Ok(batch)
    }

    /// Drive the full simulation into a service.
    ///
    /// Returns the number of readings ingested.
    pub fn run_into<S: ReadingStore>(
        &mut self,
        service: &mut TelemetryService<S>,
    ) -> Result<usize, SimulatorError> {
        let mut ingested = 0;
        loop {
            let batch = self.next_batch()?;
            if batch.is_empty() {
                break;
            }
            for request in batch {
                service.ingest(request)?;
                ingested += 1;
            }
        }
        info!("simulation complete: {} readings ingested", ingested);
        Ok(ingested)
    }

    /// Run the full simulation and collect the output instead of
    /// ingesting it.
    pub fn run_collect(&mut self) -> Result<SimulationLog, SimulatorError> {
        let mut log = SimulationLog::new();
        loop {
            let batch = self.next_batch()?;
            if batch.is_empty() {
                break;
            }
            log.extend(&batch);
        }
        Ok(log)
    }

    fn tick_timestamp(&self) -> Result<DateTime<Utc>, SimulatorError> {
        let ms = self.config.start_time_ms + (self.tick as i64) * (self.config.interval_ms as i64);
        Utc.timestamp_millis_opt(ms)
            .single()
            .ok_or(SimulatorError::TimestampOutOfRange(ms))
    }

    fn sample_value(rng: &mut StdRng, profile: &DeviceProfile, allow_spikes: bool) -> f64 {
        let mut value = rng.gen_range(profile.min..=profile.max);

        if profile.noise_std > 0.0 {
            if let Ok(noise) = Normal::new(0.0, profile.noise_std) {
                value += noise.sample(rng);
            }
        }

        // Roughly one reading in fifty spikes to 1.5x the range ceiling.
        if allow_spikes && rng.gen_bool(0.02) {
            value = profile.max * 1.5;
        }

        value
    }
}

/// Collected output of a simulation run, exportable as JSON lines.
#[derive(Debug, Default)]
pub struct SimulationLog {
    requests: Vec<ReadingRequest>,
}

impl SimulationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch.
    pub fn extend(&mut self, batch: &[ReadingRequest]) {
        self.requests.extend_from_slice(batch);
    }

    /// Number of collected requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Check whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Collected requests.
    pub fn requests(&self) -> &[ReadingRequest] {
        &self.requests
    }

    /// Write one JSON object per line.
    pub fn write_jsonl<P: AsRef<Path>>(&self, path: P) -> Result<(), SimulatorError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for request in &self.requests {
            serde_json::to_writer(&mut writer, request)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read a log back from a JSON-lines file.
    pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Self, SimulatorError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut requests = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            requests.push(serde_json::from_str(&line)?);
        }
        Ok(Self { requests })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::default_fleet;
    use sentra::{MemoryStore, StrategyRegistry};

    fn test_config() -> SimulatorConfig {
        SimulatorConfig::new().with_max_records(30).with_seed(42)
    }

    #[test]
    fn test_disabled_simulator_emits_nothing() {
        let mut simulator = Simulator::with_default_fleet(test_config().disabled());
        let batch = simulator.next_batch().unwrap();
        assert!(batch.is_empty());
        assert_eq!(simulator.emitted(), 0);
    }

    #[test]
    fn test_batch_covers_fleet() {
        let mut simulator = Simulator::with_default_fleet(test_config());
        let batch = simulator.next_batch().unwrap();

        assert_eq!(batch.len(), 3);
        let metrics: Vec<&str> = batch.iter().map(|r| r.metric.as_str()).collect();
        assert!(metrics.contains(&"temperature"));
        assert!(metrics.contains(&"heart-rate"));
        assert!(metrics.contains(&"fuel-level"));
    }

    #[test]
    fn test_values_stay_in_profile_range() {
        let mut simulator = Simulator::new(
            test_config().with_max_records(300),
            vec![DeviceProfile::new(
                "thermostat-1",
                "thermostat",
                "temperature",
                20.0,
                30.0,
            )],
        );

        while !simulator.finished() {
            for request in simulator.next_batch().unwrap() {
                assert!(request.value >= 20.0 && request.value <= 30.0);
            }
        }
    }

    #[test]
    fn test_max_records_respected() {
        let mut simulator = Simulator::with_default_fleet(test_config().with_max_records(7));

        let mut total = 0;
        loop {
            let batch = simulator.next_batch().unwrap();
            if batch.is_empty() {
                break;
            }
            total += batch.len();
        }

        // The budget truncates the third tick: 3 + 3 + 1.
        assert_eq!(total, 7);
        assert!(simulator.finished());
    }

    #[test]
    fn test_seeded_runs_are_deterministic() {
        let mut first = Simulator::with_default_fleet(test_config());
        let mut second = Simulator::with_default_fleet(test_config());

        let a = first.run_collect().unwrap();
        let b = second.run_collect().unwrap();

        assert_eq!(a.len(), b.len());
        for (x, y) in a.requests().iter().zip(b.requests()) {
            assert_eq!(x.value, y.value);
            assert_eq!(x.timestamp, y.timestamp);
        }
    }

    #[test]
    fn test_timestamps_advance_by_interval() {
        let mut simulator = Simulator::with_default_fleet(
            test_config().with_interval_ms(60_000).with_max_records(6),
        );

        let first = simulator.next_batch().unwrap();
        let second = simulator.next_batch().unwrap();

        let delta = second[0].timestamp - first[0].timestamp;
        assert_eq!(delta.num_milliseconds(), 60_000);
    }

    #[test]
    fn test_run_into_service() {
        let mut simulator = Simulator::with_default_fleet(test_config());
        let mut service = TelemetryService::new(
            MemoryStore::new(),
            StrategyRegistry::with_default_strategies(),
        );

        let ingested = simulator.run_into(&mut service).unwrap();
        assert_eq!(ingested, 30);

        let summary = service.stats("thermostat-1", "temperature").unwrap();
        assert!(summary.min >= 20.0);
        assert!(summary.max <= 30.0);
    }

    #[test]
    fn test_jsonl_roundtrip() {
        let mut simulator = Simulator::with_default_fleet(test_config().with_max_records(9));
        let log = simulator.run_collect().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.jsonl");
        log.write_jsonl(&path).unwrap();

        let parsed = SimulationLog::read_jsonl(&path).unwrap();
        assert_eq!(parsed.len(), log.len());
        assert_eq!(parsed.requests()[0].device_id, log.requests()[0].device_id);
        assert_eq!(parsed.requests()[0].value, log.requests()[0].value);
    }
}
