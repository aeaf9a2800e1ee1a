//! Core simulation result types.

use std::fmt;

use super::summary::OutcomeSummary;

/// Outcome of one `(year, configuration)` evaluation.
///
/// The capacity and consumption fields are the configured values that
/// produced the probability, not statistics of the sampled data.
///
/// # Examples
///
/// ```
/// use outage_sim::devices::{Battery, ConsumptionProfile};
/// use outage_sim::sim::engine::SolarBatterySim;
///
/// let sim = SolarBatterySim::new(
///     "demo",
///     1_000,
///     2,
///     vec![Battery::new(10.0, 0.0, vec![]).unwrap()],
///     ConsumptionProfile::new(-2.0, 0.0, vec![]).unwrap(),
/// )
/// .unwrap();
/// let result = sim.simple_sim();
/// assert_eq!(result.p_success, 1.0);
/// assert!(result.raw_outcomes.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolarSimResult {
    /// Fraction of trials that passed, in `[0, 1]`.
    pub p_success: f64,
    /// Number of passing trials.
    pub successes: usize,
    /// Number of trials run.
    pub n_simulations: usize,
    /// Sum of battery capacities (kWh).
    pub total_battery_capacity: f64,
    /// Sum of accessible battery capacities (kWh).
    pub total_accessible_capacity: f64,
    /// Profile mean daily net consumption (kWh).
    pub avg_net_consumption: f64,
    /// Per-trial `total_net_kwh` in trial order, when retained.
    pub raw_outcomes: Option<Vec<f64>>,
}

impl SolarSimResult {
    /// Margin statistics over the retained raw outcomes.
    pub fn summary(&self) -> Option<OutcomeSummary> {
        self.raw_outcomes
            .as_deref()
            .map(OutcomeSummary::from_outcomes)
    }
}

impl fmt::Display for SolarSimResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p_success={:.4} ({}/{}) | capacity={:.3} kWh  accessible={:.3} kWh | \
             avg_net={:.4} kWh/day",
            self.p_success,
            self.successes,
            self.n_simulations,
            self.total_battery_capacity,
            self.total_accessible_capacity,
            self.avg_net_consumption,
        )
    }
}

/// One labeled year of a multi-year run.
#[derive(Debug, Clone, PartialEq)]
pub struct YearResult {
    /// `{label}_y{year}`.
    pub label: String,
    /// Zero-based year index; 0 is the undegraded baseline.
    pub year: usize,
    pub result: SolarSimResult,
}

/// Year-ordered results of a multi-year run, addressable by label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearlyResults {
    years: Vec<YearResult>,
}

impl YearlyResults {
    pub(crate) fn with_capacity(n_years: usize) -> Self {
        Self {
            years: Vec::with_capacity(n_years),
        }
    }

    pub(crate) fn push(&mut self, year: YearResult) {
        self.years.push(year);
    }

    /// Looks up a year by its `{label}_y{year}` key.
    pub fn get(&self, label: &str) -> Option<&SolarSimResult> {
        self.years
            .iter()
            .find(|y| y.label == label)
            .map(|y| &y.result)
    }

    /// Looks up a year by index.
    pub fn year(&self, year: usize) -> Option<&YearResult> {
        self.years.get(year)
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &YearResult> {
        self.years.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.years.iter().map(|y| y.label.as_str())
    }

    /// Success probability per year, in year order.
    pub fn p_success_by_year(&self) -> Vec<f64> {
        self.years.iter().map(|y| y.result.p_success).collect()
    }
}

impl<'a> IntoIterator for &'a YearlyResults {
    type Item = &'a YearResult;
    type IntoIter = std::slice::Iter<'a, YearResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.years.iter()
    }
}
