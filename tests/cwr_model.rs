use cohort::math::grid::linspace;
use cohort::model::cwr::{CwrModel, CwrParams};

fn baseline_model() -> CwrModel {
    CwrModel::new(CwrParams::baseline()).expect("baseline params invalid")
}

fn rel_close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn initial_conditions_recovered_at_t0() {
    let m = baseline_model();
    let p = m.params.clone();
    assert!(rel_close(m.children(0.0), p.x0, 1e-6));
    assert!(rel_close(m.workers(0.0), p.y0, 1e-6));
    assert!(rel_close(m.retirees(0.0), p.z0, 1e-6));
}

#[test]
fn evaluation_is_deterministic() {
    let m = baseline_model();
    for t in [0.0, 0.5, 13.0, 100.0] {
        assert_eq!(m.children(t).to_bits(), m.children(t).to_bits());
        assert_eq!(m.workers(t).to_bits(), m.workers(t).to_bits());
        assert_eq!(m.retirees(t).to_bits(), m.retirees(t).to_bits());
    }
}

#[test]
fn children_stay_nonnegative_and_reach_steady_state() {
    let m = baseline_model();
    for &t in &linspace(0.0, 100.0, 100) {
        assert!(m.children(t) >= 0.0, "C({}) went negative", t);
    }
    // The decaying exponential is long gone at t = 10000; only the
    // inflow/outflow balance b/beta remains.
    let steady = m.params.b / m.params.beta;
    assert!(rel_close(m.children(10_000.0), steady, 1e-9));
}

#[test]
fn equal_rates_are_rejected() {
    let mut p = CwrParams::baseline();
    p.gamma = p.beta;
    assert!(CwrModel::new(p).is_err());
}

#[test]
fn zero_rates_are_rejected() {
    let mut p = CwrParams::baseline();
    p.beta = 0.0;
    assert!(CwrModel::new(p).is_err());

    let mut p = CwrParams::baseline();
    p.gamma = 0.0;
    assert!(CwrModel::new(p).is_err());
}

#[test]
fn nonfinite_params_are_rejected() {
    let mut p = CwrParams::baseline();
    p.x0 = f64::NAN;
    assert!(CwrModel::new(p).is_err());

    let mut p = CwrParams::baseline();
    p.b = f64::INFINITY;
    assert!(CwrModel::new(p).is_err());

    let mut p = CwrParams::baseline();
    p.beta = f64::NAN;
    assert!(CwrModel::new(p).is_err());
}

#[test]
fn linspace_covers_both_endpoints_uniformly() {
    let ts = linspace(0.0, 100.0, 100);
    assert_eq!(ts.len(), 100);
    assert_eq!(ts[0], 0.0);
    assert_eq!(ts[99], 100.0);
    let step = 100.0 / 99.0;
    for w in ts.windows(2) {
        assert!((w[1] - w[0] - step).abs() < 1e-9);
    }
}

#[test]
fn sample_produces_parallel_series() {
    let m = baseline_model();
    let ts = linspace(0.0, 100.0, 100);
    let s = m.sample(&ts);
    assert_eq!(s.len(), 100);
    assert_eq!(s.t, ts);
    for (i, &t) in ts.iter().enumerate() {
        assert_eq!(s.children[i].to_bits(), m.children(t).to_bits());
        assert_eq!(s.workers[i].to_bits(), m.workers(t).to_bits());
        assert_eq!(s.retirees[i].to_bits(), m.retirees(t).to_bits());
    }
}
