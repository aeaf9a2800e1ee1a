//! Common types and traits for degrading devices.

use crate::error::{ConfigurationError, check_fractions};

/// Shrinks `value` by `fraction` of itself.
///
/// # Examples
///
/// ```
/// use outage_sim::devices::types::degrade;
///
/// assert_eq!(degrade(100.0, 0.1), 90.0);
/// assert_eq!(degrade(-4.0, 0.25), -3.0);
/// ```
pub fn degrade(value: f64, fraction: f64) -> f64 {
    value * (1.0 - fraction)
}

/// Ordered per-year shrink fractions, each in `[0, 1)`.
///
/// Entry `k - 1` is applied when moving from year `k - 1` to year `k`.
/// Years past the end of the list apply no further degradation, so the
/// last cumulative value is held.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DegradationProfile {
    fractions: Vec<f64>,
}

impl DegradationProfile {
    /// Creates a profile after checking every fraction lies in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` naming the first out-of-range entry.
    pub fn new(fractions: Vec<f64>, field: &str) -> Result<Self, ConfigurationError> {
        check_fractions(&fractions, field)?;
        Ok(Self { fractions })
    }

    /// A profile that never degrades.
    pub fn none() -> Self {
        Self::default()
    }

    /// Fraction applied when entering `year` (1-based). Year 0 and years past
    /// the profile's end return 0.
    pub fn fraction_for_year(&self, year: usize) -> f64 {
        if year == 0 {
            return 0.0;
        }
        self.fractions.get(year - 1).copied().unwrap_or(0.0)
    }

    /// Number of years with an explicit fraction.
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }
}

/// An entity whose headline value shrinks year over year.
///
/// Implementors return fresh values; `self` is never modified.
pub trait Degradable: Clone {
    /// The entity's own degradation curve.
    fn degradation(&self) -> &DegradationProfile;

    /// Returns a copy with the degrading value shrunk by `fraction`.
    fn degraded_by(&self, fraction: f64) -> Self;

    /// Returns a copy degraded through `year`, treating `self` as year 0.
    ///
    /// Applies each year's fraction to the already-degraded value, so
    /// fractions compound.
    fn degraded_for_year(&self, year: usize) -> Self {
        let profile = self.degradation();
        (1..=year).fold(self.clone(), |current, k| {
            current.degraded_by(profile.fraction_for_year(k))
        })
    }

    /// Human-readable type name for logging.
    fn device_type(&self) -> &'static str;
}
