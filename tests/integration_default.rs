//! Integration tests for the reference three-battery outage scenario.

mod common;

use outage_sim::devices::{Battery, ConsumptionProfile};
use outage_sim::sim::engine::SolarBatterySim;

#[test]
fn reference_scenario_probability() {
    common::init_tracing();
    let result = common::reference_sim(200_000).simple_sim();

    assert!((result.total_accessible_capacity - 38.475).abs() < 1e-9);
    assert_eq!(result.n_simulations, 200_000);
    assert!(
        (result.p_success - 0.89).abs() < 0.01,
        "p_success {} outside 0.89 ± 0.01",
        result.p_success
    );
    assert_eq!(
        result.p_success,
        result.successes as f64 / result.n_simulations as f64
    );
}

#[test]
fn repeated_runs_are_identical() {
    let sim = common::reference_sim(20_000);
    assert_eq!(sim.simple_sim(), sim.simple_sim());
}

#[test]
fn steady_consumption_is_deterministic() {
    // 38.475 kWh accessible against 4 days of -9.6 kWh: 38.475 - 38.4 >= 0.
    let covered = SolarBatterySim::new(
        "covered",
        1_000,
        4,
        vec![common::powerwall(); 3],
        common::steady_household(-9.6),
    )
    .unwrap();
    assert_eq!(covered.simple_sim().p_success, 1.0);

    let short = SolarBatterySim::new(
        "short",
        1_000,
        4,
        vec![common::powerwall(); 3],
        common::steady_household(-9.7),
    )
    .unwrap();
    assert_eq!(short.simple_sim().p_success, 0.0);
}

#[test]
fn steady_consumption_exactly_covered_survives() {
    // 1.5 kWh against 15 days of -0.1 kWh leaves a margin of exactly zero.
    let sim = SolarBatterySim::new(
        "exact",
        10,
        15,
        vec![Battery::new(1.5, 0.0, Vec::new()).unwrap()],
        common::steady_household(-0.1),
    )
    .unwrap();
    let result = sim.simple_sim_with_outcomes();
    assert_eq!(result.p_success, 1.0);
    assert_eq!(result.raw_outcomes.as_deref().map(|o| o[0]), Some(0.0));
}

#[test]
fn more_batteries_never_hurt() {
    let mut last = 0.0;
    for n in 1..=5 {
        let sim = SolarBatterySim::new(
            "fleet",
            10_000,
            4,
            vec![common::powerwall(); n],
            common::household(),
        )
        .unwrap();
        let p = sim.simple_sim().p_success;
        assert!(p >= last, "{n} batteries: {p} < {last}");
        last = p;
    }
}

#[test]
fn heavier_draw_never_helps() {
    let mut last = 1.0;
    for mean in [-1.0, -3.0, -5.0, -8.0, -12.0] {
        let sim = SolarBatterySim::new(
            "draw",
            10_000,
            4,
            vec![common::powerwall(); 3],
            ConsumptionProfile::new(mean, 10.004, Vec::new()).unwrap(),
        )
        .unwrap();
        let p = sim.simple_sim().p_success;
        assert!(p <= last, "mean {mean}: {p} > {last}");
        last = p;
    }
}

#[test]
fn outcome_summary_matches_probability() {
    let result = common::reference_sim(10_000).simple_sim_with_outcomes();
    let summary = result.summary().unwrap();
    assert_eq!(summary.n_trials, 10_000);
    assert!(summary.p5_margin_kwh <= summary.p50_margin_kwh);
    assert!(summary.p50_margin_kwh <= summary.p95_margin_kwh);
    assert!(summary.min_margin_kwh <= summary.p5_margin_kwh);
    assert!(summary.p95_margin_kwh <= summary.max_margin_kwh);
    // Mean margin is 38.475 + 4 × -3.4645 ≈ 24.6 kWh.
    assert!((summary.mean_margin_kwh - 24.617).abs() < 1.0);
}

#[test]
fn battery_without_reserve_is_fully_accessible() {
    let sim = SolarBatterySim::new(
        "bare",
        10,
        1,
        vec![Battery::new(10.0, 0.0, Vec::new()).unwrap()],
        common::steady_household(-1.0),
    )
    .unwrap();
    let result = sim.simple_sim();
    assert_eq!(result.total_battery_capacity, result.total_accessible_capacity);
}
