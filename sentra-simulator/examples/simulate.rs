//! Fleet simulation example
//!
//! Drives the stock three-device fleet into an in-memory telemetry
//! service and prints aggregated statistics.
//!
//! Run with: `cargo run -p sentra-simulator --example simulate`

use sentra::{MemoryStore, StrategyRegistry, TelemetryService};
use sentra_simulator::{Simulator, SimulatorConfig};

fn main() {
    println!("=== SENTRA Fleet Simulation ===\n");

    let config = SimulatorConfig::new()
        .with_interval_ms(1000)
        .with_max_records(300)
        .with_seed(42);

    let mut simulator = Simulator::with_default_fleet(config);
    let mut service = TelemetryService::new(
        MemoryStore::new(),
        StrategyRegistry::with_default_strategies(),
    );

    let ingested = simulator.run_into(&mut service).expect("simulation failed");
    println!("Ingested {} readings\n", ingested);

    match service.stats("thermostat-1", "temperature") {
        Ok(summary) => {
            println!("thermostat-1 temperature:");
            println!("{}\n", summary.to_json().expect("serialization failed"));
        }
        Err(e) => println!("stats failed: {}\n", e),
    }

    // The stock registry only aggregates temperature and humidity;
    // other fleet metrics surface as unsupported.
    if let Err(e) = service.stats("heartrate-1", "heart-rate") {
        println!("heartrate-1 heart-rate: {}", e);
    }
}
