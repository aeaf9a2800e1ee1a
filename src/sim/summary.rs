//! Post-hoc margin statistics from retained trial outcomes.

use std::fmt;

/// Descriptive statistics of per-trial `total_net_kwh` margins.
///
/// Computed from the raw outcome vector so the reported numbers always match
/// the trials behind `p_success`.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeSummary {
    /// Number of trials summarized.
    pub n_trials: usize,
    /// Mean margin (kWh).
    pub mean_margin_kwh: f64,
    /// Smallest margin (kWh).
    pub min_margin_kwh: f64,
    /// Largest margin (kWh).
    pub max_margin_kwh: f64,
    /// 5th percentile margin (kWh).
    pub p5_margin_kwh: f64,
    /// Median margin (kWh).
    pub p50_margin_kwh: f64,
    /// 95th percentile margin (kWh).
    pub p95_margin_kwh: f64,
    /// Mean energy shortfall across failing trials (kWh, positive).
    pub mean_shortfall_kwh: f64,
}

impl OutcomeSummary {
    /// Computes all statistics from the outcome vector.
    ///
    /// # Arguments
    ///
    /// * `outcomes` - Per-trial total net energy (kWh)
    ///
    /// # Returns
    ///
    /// An `OutcomeSummary`; all zeros for an empty slice.
    pub fn from_outcomes(outcomes: &[f64]) -> Self {
        if outcomes.is_empty() {
            return Self {
                n_trials: 0,
                mean_margin_kwh: 0.0,
                min_margin_kwh: 0.0,
                max_margin_kwh: 0.0,
                p5_margin_kwh: 0.0,
                p50_margin_kwh: 0.0,
                p95_margin_kwh: 0.0,
                mean_shortfall_kwh: 0.0,
            };
        }

        let mut sorted = outcomes.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let sum: f64 = sorted.iter().sum();

        let mut shortfall_sum = 0.0_f64;
        let mut failures = 0_usize;
        for &v in sorted.iter().take_while(|&&v| v < 0.0) {
            shortfall_sum += -v;
            failures += 1;
        }

        let mean_shortfall_kwh = if failures > 0 {
            shortfall_sum / failures as f64
        } else {
            0.0
        };

        Self {
            n_trials: n,
            mean_margin_kwh: sum / n as f64,
            min_margin_kwh: sorted[0],
            max_margin_kwh: sorted[n - 1],
            p5_margin_kwh: nearest_rank(&sorted, 5.0),
            p50_margin_kwh: nearest_rank(&sorted, 50.0),
            p95_margin_kwh: nearest_rank(&sorted, 95.0),
            mean_shortfall_kwh,
        }
    }
}

/// Nearest-rank percentile of an ascending, non-empty slice.
fn nearest_rank(sorted: &[f64], pct: f64) -> f64 {
    let rank = ((pct / 100.0) * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

impl fmt::Display for OutcomeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Outcome Summary ({} trials) ---", self.n_trials)?;
        writeln!(f, "Mean margin:       {:.3} kWh", self.mean_margin_kwh)?;
        writeln!(
            f,
            "Margin range:      {:.3} .. {:.3} kWh",
            self.min_margin_kwh, self.max_margin_kwh
        )?;
        writeln!(
            f,
            "P5 / P50 / P95:    {:.3} / {:.3} / {:.3} kWh",
            self.p5_margin_kwh, self.p50_margin_kwh, self.p95_margin_kwh
        )?;
        write!(f, "Mean shortfall:    {:.3} kWh", self.mean_shortfall_kwh)
    }
}
