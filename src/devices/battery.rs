use crate::devices::types::{Degradable, DegradationProfile, degrade};
use crate::error::{ConfigurationError, check_fraction};

/// A backup battery with a reserved, unusable share of its capacity.
///
/// `Battery` is an immutable value. Year-over-year capacity loss produces a
/// new instance through [`Degradable`]; the original keeps its capacity.
///
/// # Examples
///
/// ```
/// use outage_sim::devices::Battery;
///
/// let battery = Battery::new(13.5, 0.05, vec![0.1, 0.05, 0.05]).unwrap();
/// assert!((battery.accessible_capacity_kwh() - 12.825).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Battery {
    /// Battery capacity in kilowatt-hours.
    capacity_kwh: f64,

    /// Fraction of capacity kept in reserve (0..1.0).
    reserve_pct: f64,

    /// Per-year capacity loss.
    degradation: DegradationProfile,
}

impl Battery {
    /// Creates a new battery with the specified parameters.
    ///
    /// # Arguments
    ///
    /// * `capacity_kwh` - Battery capacity in kWh (must be > 0)
    /// * `reserve_pct` - Reserved fraction of capacity, in `[0, 1)`
    /// * `degradation_profile` - Per-year capacity loss fractions, each in `[0, 1)`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if capacity is zero/negative/non-finite,
    /// the reserve is out of range, or any degradation fraction is invalid.
    pub fn new(
        capacity_kwh: f64,
        reserve_pct: f64,
        degradation_profile: Vec<f64>,
    ) -> Result<Self, ConfigurationError> {
        if !(capacity_kwh.is_finite() && capacity_kwh > 0.0) {
            return Err(ConfigurationError::new(
                "battery.capacity_kwh",
                format!("must be a finite value > 0, got {capacity_kwh}"),
            ));
        }
        check_fraction(reserve_pct, "battery.reserve_pct")?;
        let degradation =
            DegradationProfile::new(degradation_profile, "battery.degradation_profile")?;

        Ok(Self {
            capacity_kwh,
            reserve_pct,
            degradation,
        })
    }

    pub fn capacity_kwh(&self) -> f64 {
        self.capacity_kwh
    }

    pub fn reserve_pct(&self) -> f64 {
        self.reserve_pct
    }

    /// Capacity minus the reserved share, derived from the current capacity.
    pub fn accessible_capacity_kwh(&self) -> f64 {
        self.capacity_kwh * (1.0 - self.reserve_pct)
    }
}

impl Degradable for Battery {
    fn degradation(&self) -> &DegradationProfile {
        &self.degradation
    }

    fn degraded_by(&self, fraction: f64) -> Self {
        Self {
            capacity_kwh: degrade(self.capacity_kwh, fraction),
            ..self.clone()
        }
    }

    fn device_type(&self) -> &'static str {
        "Battery"
    }
}
