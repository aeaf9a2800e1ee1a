//! Integration tests for the year-over-year degradation driver.

mod common;

use outage_sim::devices::Degradable;

#[test]
fn ten_year_projection_trends_down_then_holds() {
    common::init_tracing();
    let sim = common::reference_sim(50_000);
    let years = sim.multi_year_sim(10).unwrap();
    let p = years.p_success_by_year();

    assert_eq!(p.len(), 10);
    // Battery fade dominates while the battery profile lasts.
    assert!(p[0] >= p[1] && p[1] >= p[2] && p[2] >= p[3], "{p:?}");
    assert!(p[0] > p[3], "{p:?}");
    assert!(p[0] > p[9], "{p:?}");
    // Both profiles are exhausted after year 5; later years repeat it.
    for year in 6..10 {
        assert_eq!(p[year], p[5], "year {year} should hold year 5: {p:?}");
    }
}

#[test]
fn year_zero_reproduces_simple_sim() {
    let sim = common::reference_sim(200_000);
    let years = sim.multi_year_sim(2).unwrap();
    let direct = sim.simple_sim();
    assert_eq!(years.get("home_y0"), Some(&direct));
    assert_eq!(years.year(0).map(|y| y.label.as_str()), Some("home_y0"));
}

#[test]
fn labels_cover_every_year_in_order() {
    let years = common::reference_sim(100).multi_year_sim(10).unwrap();
    let expected: Vec<String> = (0..10).map(|y| format!("home_y{y}")).collect();
    let labels: Vec<&str> = years.labels().collect();
    assert_eq!(labels, expected);
}

#[test]
fn reported_state_follows_degradation_chain() {
    let sim = common::reference_sim(100);
    let years = sim.multi_year_sim(10).unwrap();

    for y in &years {
        let fleet = sim.fleet().degraded_for_year(y.year);
        let profile = sim.profile().degraded_for_year(y.year);
        assert!((y.result.total_battery_capacity - fleet.total_capacity_kwh()).abs() < 1e-9);
        assert!(
            (y.result.total_accessible_capacity - fleet.total_accessible_capacity_kwh()).abs()
                < 1e-9
        );
        assert!((y.result.avg_net_consumption - profile.avg_net_consumption_kwh()).abs() < 1e-12);
    }

    let y3 = years.get("home_y3").unwrap();
    assert!((y3.total_battery_capacity - 40.5 * 0.9 * 0.95 * 0.95).abs() < 1e-9);
    let y5 = years.get("home_y5").unwrap();
    assert!((y5.avg_net_consumption - (-3.4645 * 0.98_f64.powi(5))).abs() < 1e-12);
}

#[test]
fn configuration_is_not_mutated() {
    let sim = common::reference_sim(100);
    let before_fleet = sim.fleet().clone();
    let before_profile = sim.profile().clone();
    let _ = sim.multi_year_sim(10).unwrap();
    assert_eq!(sim.fleet(), &before_fleet);
    assert_eq!(sim.profile(), &before_profile);
}

#[test]
fn zero_years_is_a_configuration_error() {
    let err = common::reference_sim(100).multi_year_sim(0).unwrap_err();
    assert_eq!(err.field, "simulation.n_years");
}
