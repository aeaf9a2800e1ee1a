//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::devices::{Battery, ConsumptionProfile};
use crate::error::{ConfigurationError, check_fraction, check_fractions};
use crate::sim::engine::{DEFAULT_SEED, SolarBatterySim};
use crate::sim::types::YearlyResults;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Trial counts, outage length, horizon and seed.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Daily net consumption distribution.
    #[serde(default)]
    pub consumption: ConsumptionConfig,
    /// Battery groups making up the fleet.
    #[serde(default = "default_batteries", rename = "battery")]
    pub batteries: Vec<BatteryConfig>,
}

/// Simulation sizing and global parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Name used for output keys.
    pub label: String,
    /// Number of Monte Carlo trials per year (must be > 0).
    pub n_simulations: usize,
    /// Outage length in days (must be > 0).
    pub n_consecutive_days: usize,
    /// Years to project (must be > 0).
    pub n_years: usize,
    /// Master random seed.
    pub seed: u64,
    /// Keep per-trial margins in the results.
    pub keep_outcomes: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            label: "baseline".to_string(),
            n_simulations: 200_000,
            n_consecutive_days: 4,
            n_years: 10,
            seed: DEFAULT_SEED,
            keep_outcomes: false,
        }
    }
}

/// Daily net consumption parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsumptionConfig {
    /// Mean daily net consumption (kWh, negative = net draw).
    pub avg_net_consumption_kwh: f64,
    /// Standard deviation of daily net consumption (kWh).
    pub stdv_net_consumption_kwh: f64,
    /// Per-year shrink of the mean.
    pub degradation_profile: Vec<f64>,
}

impl Default for ConsumptionConfig {
    fn default() -> Self {
        Self {
            avg_net_consumption_kwh: -3.4645,
            stdv_net_consumption_kwh: 10.004,
            degradation_profile: vec![0.02, 0.02, 0.02, 0.02, 0.02],
        }
    }
}

/// One group of identical batteries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatteryConfig {
    /// Capacity per battery (kWh).
    pub capacity_kwh: f64,
    /// Reserved fraction of capacity (0.0–1.0, exclusive).
    pub reserve_pct: f64,
    /// Per-year capacity loss.
    pub degradation_profile: Vec<f64>,
    /// Number of identical batteries in this group.
    pub count: usize,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            capacity_kwh: 13.5,
            reserve_pct: 0.05,
            degradation_profile: vec![0.1, 0.05, 0.05],
            count: 1,
        }
    }
}

fn default_batteries() -> Vec<BatteryConfig> {
    vec![BatteryConfig {
        count: 3,
        ..BatteryConfig::default()
    }]
}

impl ScenarioConfig {
    /// Returns the baseline scenario: three 13.5 kWh batteries and a
    /// four-day outage.
    pub fn baseline() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            consumption: ConsumptionConfig::default(),
            batteries: default_batteries(),
        }
    }

    /// Returns the single-battery preset: one 13.5 kWh battery, two-day outage.
    pub fn single_battery() -> Self {
        Self {
            simulation: SimulationConfig {
                label: "single_battery".to_string(),
                n_consecutive_days: 2,
                ..SimulationConfig::default()
            },
            consumption: ConsumptionConfig::default(),
            batteries: vec![BatteryConfig::default()],
        }
    }

    /// Returns the winter preset: heavy draw, little solar, week-long outage.
    pub fn winter() -> Self {
        Self {
            simulation: SimulationConfig {
                label: "winter".to_string(),
                n_consecutive_days: 7,
                ..SimulationConfig::default()
            },
            consumption: ConsumptionConfig {
                avg_net_consumption_kwh: -9.5,
                stdv_net_consumption_kwh: 4.0,
                degradation_profile: Vec::new(),
            },
            batteries: vec![BatteryConfig {
                count: 4,
                ..BatteryConfig::default()
            }],
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "single_battery", "winter"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigurationError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "single_battery" => Ok(Self::single_battery()),
            "winter" => Ok(Self::winter()),
            _ => Err(ConfigurationError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigurationError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigurationError::new("scenario", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigurationError> {
        toml::from_str(s).map_err(|e| ConfigurationError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigurationError> {
        let mut errors = Vec::new();
        let s = &self.simulation;

        if s.n_simulations == 0 {
            errors.push(ConfigurationError::new(
                "simulation.n_simulations",
                "must be > 0",
            ));
        }
        if s.n_consecutive_days == 0 {
            errors.push(ConfigurationError::new(
                "simulation.n_consecutive_days",
                "must be >= 1",
            ));
        }
        if s.n_years == 0 {
            errors.push(ConfigurationError::new("simulation.n_years", "must be >= 1"));
        }

        let c = &self.consumption;
        if !c.avg_net_consumption_kwh.is_finite() {
            errors.push(ConfigurationError::new(
                "consumption.avg_net_consumption_kwh",
                "must be finite",
            ));
        }
        if !(c.stdv_net_consumption_kwh.is_finite() && c.stdv_net_consumption_kwh >= 0.0) {
            errors.push(ConfigurationError::new(
                "consumption.stdv_net_consumption_kwh",
                "must be a finite value >= 0",
            ));
        }
        if let Err(e) = check_fractions(&c.degradation_profile, "consumption.degradation_profile")
        {
            errors.push(e);
        }

        if self.batteries.iter().all(|b| b.count == 0) {
            errors.push(ConfigurationError::new(
                "battery",
                "fleet must contain at least one battery",
            ));
        }
        for (i, bat) in self.batteries.iter().enumerate() {
            if !(bat.capacity_kwh.is_finite() && bat.capacity_kwh > 0.0) {
                errors.push(ConfigurationError::new(
                    format!("battery[{i}].capacity_kwh"),
                    "must be a finite value > 0",
                ));
            }
            if let Err(e) = check_fraction(bat.reserve_pct, &format!("battery[{i}].reserve_pct")) {
                errors.push(e);
            }
            if let Err(e) = check_fractions(
                &bat.degradation_profile,
                &format!("battery[{i}].degradation_profile"),
            ) {
                errors.push(e);
            }
        }

        errors
    }

    /// Builds the simulation described by this scenario.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigurationError` raised by an entity constructor.
    pub fn build(&self) -> Result<SolarBatterySim, ConfigurationError> {
        let c = &self.consumption;
        let profile = ConsumptionProfile::new(
            c.avg_net_consumption_kwh,
            c.stdv_net_consumption_kwh,
            c.degradation_profile.clone(),
        )?;

        let mut batteries = Vec::new();
        for bat in &self.batteries {
            let battery = Battery::new(
                bat.capacity_kwh,
                bat.reserve_pct,
                bat.degradation_profile.clone(),
            )?;
            batteries.extend(std::iter::repeat_n(battery, bat.count));
        }

        let s = &self.simulation;
        Ok(SolarBatterySim::new(
            s.label.clone(),
            s.n_simulations,
            s.n_consecutive_days,
            batteries,
            profile,
        )?
        .with_seed(s.seed))
    }

    /// Builds the simulation and projects it over `simulation.n_years`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if the scenario is invalid.
    pub fn run(&self) -> Result<YearlyResults, ConfigurationError> {
        let sim = self.build()?;
        if self.simulation.keep_outcomes {
            sim.multi_year_sim_with_outcomes(self.simulation.n_years)
        } else {
            sim.multi_year_sim(self.simulation.n_years)
        }
    }
}
