use super::*;

const EASES: [Ease; 4] = [
    Ease::Linear,
    Ease::Sinusoidal,
    Ease::EASE_OUT,
    Ease::EASE_IN_OUT,
];

fn w(start: f64, end: f64) -> ActivationWindow {
    ActivationWindow::new(start, end).unwrap()
}

#[test]
fn clamps_exactly_outside_window() {
    let win = w(0.3, 0.6);
    for ease in EASES {
        for p in [0.0, 0.1, 0.299, 0.3] {
            assert_eq!(win.interpolate(Progress::new(p), ease), 0.0);
        }
        for p in [0.6, 0.61, 0.9, 1.0] {
            assert_eq!(win.interpolate(Progress::new(p), ease), 1.0);
        }
    }
}

#[test]
fn monotonic_inside_window() {
    let win = w(0.2, 0.25);
    for ease in [Ease::Sinusoidal, Ease::EASE_OUT, Ease::EASE_IN_OUT] {
        let mut prev = 0.0;
        for i in 0..=100 {
            let p = 0.2 + 0.05 * f64::from(i) / 100.0;
            let v = win.interpolate(Progress::new(p), ease);
            assert!(v + 1e-12 >= prev);
            prev = v;
        }
    }
}

#[test]
fn continuous_at_boundaries() {
    let win = w(0.45, 0.6);
    let eps = 1e-9;
    for ease in EASES {
        let just_in = win.interpolate(Progress::new(0.45 + eps), ease);
        let just_before_end = win.interpolate(Progress::new(0.6 - eps), ease);
        assert!(just_in < 1e-6, "{ease:?} jumps at start");
        assert!(1.0 - just_before_end < 1e-6, "{ease:?} jumps at end");
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let win = w(0.28, 0.48);
    let a = win.interpolate(Progress::new(0.3711), Ease::Sinusoidal);
    let b = win.interpolate(Progress::new(0.3711), Ease::Sinusoidal);
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn map_applies_affine_range() {
    let win = w(0.45, 0.6);
    let y: f64 = win.map(Progress::new(0.2), Ease::Sinusoidal, 600.0, 0.0);
    assert_eq!(y, 600.0);
    let y: f64 = win.map(Progress::new(0.8), Ease::Sinusoidal, 600.0, 0.0);
    assert_eq!(y, 0.0);
    let v: Vec2 = win.map(
        Progress::new(0.525),
        Ease::Linear,
        Vec2::new(0.0, 10.0),
        Vec2::new(10.0, 20.0),
    );
    assert!((v.x - 5.0).abs() < 1e-9);
    assert!((v.y - 15.0).abs() < 1e-9);
}

#[test]
fn rejects_malformed_windows() {
    assert!(ActivationWindow::new(0.5, 0.5).is_err());
    assert!(ActivationWindow::new(0.6, 0.5).is_err());
    assert!(ActivationWindow::new(-0.1, 0.5).is_err());
    assert!(ActivationWindow::new(0.5, 1.1).is_err());
    assert!(ActivationWindow::new(f64::NAN, 0.5).is_err());
    assert!(matches!(
        ActivationWindow::new(0.4, 0.2),
        Err(NightscrollError::InvalidWindow { .. })
    ));
}

#[test]
fn deserialize_validates_bounds() {
    let ok: ActivationWindow = serde_json::from_str("[0.2, 0.25]").unwrap();
    assert_eq!(ok, w(0.2, 0.25));
    assert!(serde_json::from_str::<ActivationWindow>("[0.25, 0.2]").is_err());
}

#[test]
fn free_interpolate_checks_bounds_and_clamps_progress() {
    assert!(interpolate(0.5, 0.3, 0.3, Ease::Linear).is_err());
    assert_eq!(interpolate(-4.0, 0.0, 0.5, Ease::Linear).unwrap(), 0.0);
    assert_eq!(interpolate(9.0, 0.0, 0.5, Ease::Linear).unwrap(), 1.0);
    assert_eq!(interpolate(0.25, 0.0, 0.5, Ease::Linear).unwrap(), 0.5);
}

#[test]
fn overlap_is_strict() {
    assert!(!w(0.2, 0.25).overlaps(w(0.25, 0.3)));
    assert!(w(0.2, 0.26).overlaps(w(0.25, 0.3)));
}

#[test]
fn phase_classification() {
    let win = w(0.2, 0.25);
    assert_eq!(win.phase(Progress::new(0.2)), WindowPhase::Before);
    assert_eq!(win.phase(Progress::new(0.22)), WindowPhase::Inside);
    assert_eq!(win.phase(Progress::new(0.25)), WindowPhase::After);
}

#[test]
fn piecewise_matches_arrow_exit_stops() {
    let stops = [(0.0, 0.0), (0.13, 800.0), (1.0, 800.0)];
    assert_eq!(piecewise(Progress::new(0.0), &stops).unwrap(), 0.0);
    let mid = piecewise(Progress::new(0.065), &stops).unwrap();
    assert!((mid - 400.0).abs() < 1e-9);
    assert_eq!(piecewise(Progress::new(0.13), &stops).unwrap(), 800.0);
    assert_eq!(piecewise(Progress::new(0.7), &stops).unwrap(), 800.0);
    assert!(piecewise(Progress::new(0.5), &[]).is_err());
    assert!(piecewise(Progress::new(0.5), &[(0.5, 1.0), (0.2, 0.0)]).is_err());
}

#[test]
fn union_merges_touching_windows() {
    let spans = ActivationWindow::union(&[w(0.5, 0.6), w(0.2, 0.3), w(0.3, 0.4), w(0.55, 0.7)]);
    assert_eq!(spans, vec![(0.2, 0.4), (0.5, 0.7)]);
    assert!(ActivationWindow::union(&[]).is_empty());
}

#[test]
fn const_windows_match_checked_ones() {
    const BUILT_IN: ActivationWindow = ActivationWindow::new_const(0.2, 0.25);
    assert_eq!(BUILT_IN, w(0.2, 0.25));
}
