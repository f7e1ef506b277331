use pulsegraph_core::rolling::{rolling_average, RollingAverage};

#[test]
fn partial_windows_at_start() {
    // Vinduet fylles gradvis: 1, 2, … window
    let out = rolling_average(&[10.0, 20.0, 30.0], 2);
    assert_eq!(out, vec![10.0, 15.0, 25.0]);
}

#[test]
fn window_one_is_identity() {
    let xs = vec![3.0, 1.0, 4.0, 1.0, 5.0];
    assert_eq!(rolling_average(&xs, 1), xs);
}

#[test]
fn window_zero_treated_as_one() {
    let xs = vec![2.0, 4.0];
    assert_eq!(rolling_average(&xs, 0), xs);
}

#[test]
fn length_invariant() {
    let xs: Vec<f64> = (0..10).map(|i| i as f64).collect();
    for w in [1usize, 3, 10, 50] {
        assert_eq!(rolling_average(&xs, w).len(), xs.len(), "window {w}");
    }
    assert!(rolling_average(&[], 5).is_empty());
}

#[test]
fn constant_series_stays_constant() {
    let xs = vec![200.0f64; 90];
    for v in rolling_average(&xs, 30) {
        assert!((v - 200.0).abs() < 1e-9);
    }
}

#[test]
fn trailing_window_after_fill() {
    // Etter oppfyllingen skal kun de siste `window` verdiene telle
    let xs = vec![0.0, 0.0, 0.0, 30.0, 30.0, 30.0];
    let out = rolling_average(&xs, 3);
    assert!((out[5] - 30.0).abs() < 1e-9);
    assert!((out[4] - 20.0).abs() < 1e-9);
}

#[test]
fn iterator_is_lazy_and_finite() {
    let xs = vec![10.0, 20.0, 30.0];
    let mut it = RollingAverage::new(&xs, 2);
    assert_eq!(it.next(), Some(10.0));
    assert_eq!(it.next(), Some(15.0));
    assert_eq!(it.next(), Some(25.0));
    assert_eq!(it.next(), None);
}
