//! Monte Carlo estimate of whether a home battery fleet rides out a
//! multi-day grid outage, and how that changes as the batteries and the
//! household's solar surplus degrade over the years.

pub mod config;
pub mod devices;
pub mod error;
/// Result export.
pub mod io;
/// Sampling, trial evaluation, and the single- and multi-year drivers.
pub mod sim;

pub use config::ScenarioConfig;
pub use devices::{Battery, ConsumptionProfile, Degradable, DegradationProfile, Fleet};
pub use error::ConfigurationError;
pub use sim::engine::{DEFAULT_SEED, SolarBatterySim};
pub use sim::types::{SolarSimResult, YearResult, YearlyResults};
