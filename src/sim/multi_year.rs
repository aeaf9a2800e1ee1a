//! Year-over-year degradation loop around the Monte Carlo engine.

use tracing::{debug, info, instrument};

use crate::devices::Degradable;
use crate::error::ConfigurationError;

use super::engine::SolarBatterySim;
use super::types::{YearResult, YearlyResults};

/// Output key for `year` of a run named `label`.
///
/// # Examples
///
/// ```
/// use outage_sim::sim::multi_year::year_label;
///
/// assert_eq!(year_label("home", 3), "home_y3");
/// ```
pub fn year_label(label: &str, year: usize) -> String {
    format!("{label}_y{year}")
}

impl SolarBatterySim {
    /// Projects survival probability over `n_years` of degradation.
    ///
    /// Year 0 is the undegraded baseline and matches [`simple_sim`](Self::simple_sim).
    /// Each later year shrinks every battery capacity and the consumption mean
    /// by that year's fraction of the previous year's value. Every year reuses
    /// the master seed, so differences between years come from degradation
    /// alone.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if `n_years` is zero.
    #[instrument(skip(self), fields(label = %self.label()))]
    pub fn multi_year_sim(&self, n_years: usize) -> Result<YearlyResults, ConfigurationError> {
        self.run_years(n_years, false)
    }

    /// Like [`multi_year_sim`](Self::multi_year_sim), keeping raw trial
    /// outcomes for every year.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if `n_years` is zero.
    #[instrument(skip(self), fields(label = %self.label()))]
    pub fn multi_year_sim_with_outcomes(
        &self,
        n_years: usize,
    ) -> Result<YearlyResults, ConfigurationError> {
        self.run_years(n_years, true)
    }

    fn run_years(
        &self,
        n_years: usize,
        keep_outcomes: bool,
    ) -> Result<YearlyResults, ConfigurationError> {
        if n_years == 0 {
            return Err(ConfigurationError::new("simulation.n_years", "must be >= 1"));
        }

        let mut fleet = self.fleet().clone();
        let mut profile = self.profile().clone();
        let mut results = YearlyResults::with_capacity(n_years);

        for year in 0..n_years {
            if year > 0 {
                fleet = fleet.degraded_into_year(year);
                for (index, battery) in fleet.batteries().iter().enumerate() {
                    debug!(
                        year,
                        device = battery.device_type(),
                        index,
                        capacity_kwh = battery.capacity_kwh(),
                        "degraded"
                    );
                }

                let fraction = profile.degradation().fraction_for_year(year);
                profile = profile.degraded_by(fraction);
                debug!(
                    year,
                    device = profile.device_type(),
                    fraction,
                    avg_net_consumption_kwh = profile.avg_net_consumption_kwh(),
                    "degraded"
                );
            }

            let result = self.run(&fleet, &profile, keep_outcomes);
            info!(
                year,
                total_capacity_kwh = result.total_battery_capacity,
                accessible_capacity_kwh = result.total_accessible_capacity,
                avg_net_consumption_kwh = result.avg_net_consumption,
                p_success = result.p_success,
                "simulated year"
            );

            results.push(YearResult {
                label: year_label(self.label(), year),
                year,
                result,
            });
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::{Battery, ConsumptionProfile};

    fn sim(n_simulations: usize) -> SolarBatterySim {
        let b = Battery::new(13.5, 0.05, vec![0.1, 0.05, 0.05]).unwrap();
        let profile =
            ConsumptionProfile::new(-3.4645, 10.004, vec![0.02, 0.02, 0.02, 0.02, 0.02]).unwrap();
        SolarBatterySim::new("home", n_simulations, 4, vec![b; 3], profile).unwrap()
    }

    #[test]
    fn zero_years_rejected() {
        let err = sim(10).multi_year_sim(0).unwrap_err();
        assert_eq!(err.field, "simulation.n_years");
    }

    #[test]
    fn labels_are_ordered() {
        let years = sim(100).multi_year_sim(3).unwrap();
        let labels: Vec<&str> = years.labels().collect();
        assert_eq!(labels, vec!["home_y0", "home_y1", "home_y2"]);
    }

    #[test]
    fn year_zero_matches_simple_sim() {
        let s = sim(2_000);
        let years = s.multi_year_sim(2).unwrap();
        assert_eq!(years.get("home_y0"), Some(&s.simple_sim()));
    }

    #[test]
    fn capacity_compounds_each_year() {
        let years = sim(10).multi_year_sim(4).unwrap();
        let caps: Vec<f64> = years.iter().map(|y| y.result.total_battery_capacity).collect();
        let expected = [40.5, 40.5 * 0.9, 40.5 * 0.9 * 0.95, 40.5 * 0.9 * 0.95 * 0.95];
        for (got, want) in caps.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }
    }

    #[test]
    fn original_configuration_untouched() {
        let s = sim(10);
        let _ = s.multi_year_sim(6).unwrap();
        assert_eq!(s.fleet().total_capacity_kwh(), 40.5);
        assert_eq!(s.profile().avg_net_consumption_kwh(), -3.4645);
    }

    #[test]
    fn outcomes_kept_per_year() {
        let years = sim(300).multi_year_sim_with_outcomes(2).unwrap();
        for y in &years {
            assert_eq!(y.result.raw_outcomes.as_ref().map(Vec::len), Some(300));
        }
    }
}
