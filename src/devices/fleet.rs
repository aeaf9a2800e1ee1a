use crate::devices::Battery;
use crate::devices::types::Degradable;
use crate::error::ConfigurationError;

/// The set of batteries backing one outage simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    batteries: Vec<Battery>,
}

impl Fleet {
    /// Creates a fleet.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if `batteries` is empty.
    pub fn new(batteries: Vec<Battery>) -> Result<Self, ConfigurationError> {
        if batteries.is_empty() {
            return Err(ConfigurationError::new(
                "batteries",
                "fleet must contain at least one battery",
            ));
        }
        Ok(Self { batteries })
    }

    pub fn batteries(&self) -> &[Battery] {
        &self.batteries
    }

    pub fn len(&self) -> usize {
        self.batteries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batteries.is_empty()
    }

    /// Sum of battery capacities (kWh).
    pub fn total_capacity_kwh(&self) -> f64 {
        self.batteries.iter().map(Battery::capacity_kwh).sum()
    }

    /// Sum of accessible capacities (kWh).
    pub fn total_accessible_capacity_kwh(&self) -> f64 {
        self.batteries
            .iter()
            .map(Battery::accessible_capacity_kwh)
            .sum()
    }

    /// Returns a fleet where each battery takes its own fraction for `year`.
    pub fn degraded_into_year(&self, year: usize) -> Self {
        Self {
            batteries: self
                .batteries
                .iter()
                .map(|b| b.degraded_by(b.degradation().fraction_for_year(year)))
                .collect(),
        }
    }

    /// Returns a fleet with every battery degraded through `year`.
    pub fn degraded_for_year(&self, year: usize) -> Self {
        Self {
            batteries: self
                .batteries
                .iter()
                .map(|b| b.degraded_for_year(year))
                .collect(),
        }
    }
}
