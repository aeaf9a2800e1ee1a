use crate::devices::types::{Degradable, DegradationProfile, degrade};
use crate::error::ConfigurationError;

/// Normally distributed daily net consumption of a household.
///
/// Net consumption is production minus consumption, so a household that
/// draws more than it produces has a negative mean. The degradation profile
/// shrinks the mean year over year; the standard deviation is left as is.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionProfile {
    /// Mean daily net consumption (kWh).
    avg_net_consumption_kwh: f64,

    /// Standard deviation of daily net consumption (kWh, >= 0).
    stdv_net_consumption_kwh: f64,

    /// Per-year shrink of the mean.
    degradation: DegradationProfile,
}

impl ConsumptionProfile {
    /// Creates a consumption profile.
    ///
    /// # Arguments
    ///
    /// * `avg_net_consumption_kwh` - Mean daily net consumption (finite)
    /// * `stdv_net_consumption_kwh` - Standard deviation (finite, >= 0)
    /// * `degradation_profile` - Per-year shrink fractions of the mean, each in `[0, 1)`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` for a non-finite mean, a negative or
    /// non-finite standard deviation, or an invalid degradation fraction.
    pub fn new(
        avg_net_consumption_kwh: f64,
        stdv_net_consumption_kwh: f64,
        degradation_profile: Vec<f64>,
    ) -> Result<Self, ConfigurationError> {
        if !avg_net_consumption_kwh.is_finite() {
            return Err(ConfigurationError::new(
                "consumption.avg_net_consumption_kwh",
                format!("must be finite, got {avg_net_consumption_kwh}"),
            ));
        }
        if !(stdv_net_consumption_kwh.is_finite() && stdv_net_consumption_kwh >= 0.0) {
            return Err(ConfigurationError::new(
                "consumption.stdv_net_consumption_kwh",
                format!("must be a finite value >= 0, got {stdv_net_consumption_kwh}"),
            ));
        }
        let degradation =
            DegradationProfile::new(degradation_profile, "consumption.degradation_profile")?;

        Ok(Self {
            avg_net_consumption_kwh,
            stdv_net_consumption_kwh,
            degradation,
        })
    }

    pub fn avg_net_consumption_kwh(&self) -> f64 {
        self.avg_net_consumption_kwh
    }

    pub fn stdv_net_consumption_kwh(&self) -> f64 {
        self.stdv_net_consumption_kwh
    }
}

impl Degradable for ConsumptionProfile {
    fn degradation(&self) -> &DegradationProfile {
        &self.degradation
    }

    fn degraded_by(&self, fraction: f64) -> Self {
        Self {
            avg_net_consumption_kwh: degrade(self.avg_net_consumption_kwh, fraction),
            ..self.clone()
        }
    }

    fn device_type(&self) -> &'static str {
        "ConsumptionProfile"
    }
}
