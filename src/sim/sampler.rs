//! Random outage scenario generation.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::devices::ConsumptionProfile;
use crate::error::ConfigurationError;

/// Draws sequences of daily net consumption from a profile's normal
/// distribution.
///
/// The sampler holds no generator of its own; callers pass one in, so each
/// trial can own an independently seeded source.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioSampler {
    mean: f64,
    stdv: f64,
    n_days: usize,
}

impl ScenarioSampler {
    /// Creates a sampler for `n_days`-long outages.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if `n_days` is zero.
    pub fn new(profile: &ConsumptionProfile, n_days: usize) -> Result<Self, ConfigurationError> {
        if n_days == 0 {
            return Err(ConfigurationError::new(
                "simulation.n_consecutive_days",
                "must be >= 1",
            ));
        }
        Ok(Self {
            mean: profile.avg_net_consumption_kwh(),
            stdv: profile.stdv_net_consumption_kwh(),
            n_days,
        })
    }

    /// Returns a sampler with the same outage length drawing from `profile`.
    pub fn for_profile(&self, profile: &ConsumptionProfile) -> Self {
        Self {
            mean: profile.avg_net_consumption_kwh(),
            stdv: profile.stdv_net_consumption_kwh(),
            n_days: self.n_days,
        }
    }

    pub fn n_days(&self) -> usize {
        self.n_days
    }

    /// Draws one outage scenario of `n_days` independent daily values.
    ///
    /// A zero standard deviation yields `n_days` copies of the mean without
    /// touching the generator.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        if self.stdv == 0.0 {
            return vec![self.mean; self.n_days];
        }
        (0..self.n_days)
            .map(|_| {
                let z: f64 = StandardNormal.sample(rng);
                self.mean + self.stdv * z
            })
            .collect()
    }

    /// Draws one outage scenario and returns its summed net consumption.
    ///
    /// A zero standard deviation yields exactly `n_days × mean`, so the
    /// deterministic margin does not pick up per-day rounding.
    pub fn sample_total<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.stdv == 0.0 {
            return self.n_days as f64 * self.mean;
        }
        self.sample(rng).iter().sum()
    }
}
