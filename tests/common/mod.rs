//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use outage_sim::devices::{Battery, ConsumptionProfile};
use outage_sim::sim::engine::SolarBatterySim;

/// Installs a test-writer tracing subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Powerwall-class battery (13.5 kWh, 5% reserve, 10%/5%/5% yearly loss).
pub fn powerwall() -> Battery {
    Battery::new(13.5, 0.05, vec![0.1, 0.05, 0.05]).unwrap()
}

/// Reference household: net draw of about 3.5 kWh/day with wide spread and
/// five years of 2% shrinking draw.
pub fn household() -> ConsumptionProfile {
    ConsumptionProfile::new(-3.4645, 10.004, vec![0.02; 5]).unwrap()
}

/// Household with no day-to-day variation.
pub fn steady_household(avg_net_consumption_kwh: f64) -> ConsumptionProfile {
    ConsumptionProfile::new(avg_net_consumption_kwh, 0.0, Vec::new()).unwrap()
}

/// Three powerwalls against the reference household over a four-day outage.
pub fn reference_sim(n_simulations: usize) -> SolarBatterySim {
    SolarBatterySim::new(
        "home",
        n_simulations,
        4,
        vec![powerwall(); 3],
        household(),
    )
    .unwrap()
}
