//! Pass/fail evaluation of a sampled outage against the fleet's capacity.

/// Result of evaluating one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// Whether the fleet covered the outage.
    pub success: bool,
    /// Accessible capacity plus summed daily net consumption (kWh).
    pub total_net_kwh: f64,
}

/// Combines sampled scenarios with a fixed accessible capacity.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeEvaluator {
    total_accessible_capacity_kwh: f64,
}

impl OutcomeEvaluator {
    pub fn new(total_accessible_capacity_kwh: f64) -> Self {
        Self {
            total_accessible_capacity_kwh,
        }
    }

    /// Evaluates one outage scenario given day by day.
    pub fn evaluate(&self, daily_net_kwh: &[f64]) -> Outcome {
        self.evaluate_total(daily_net_kwh.iter().sum())
    }

    /// Evaluates one outage scenario from its summed net consumption.
    ///
    /// The trial succeeds when `total_net_kwh >= 0`, i.e. the batteries plus
    /// production exactly cover or exceed consumption.
    pub fn evaluate_total(&self, scenario_net_kwh: f64) -> Outcome {
        let total_net_kwh = scenario_net_kwh + self.total_accessible_capacity_kwh;
        Outcome {
            success: total_net_kwh >= 0.0,
            total_net_kwh,
        }
    }
}
