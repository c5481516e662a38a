use peakloc::lowlevel::{select_window_around_pivot, QuadraticFit};
use peakloc::IndexRange;

#[test]
fn fit_over_sub_window_ignores_outside_samples() {
    let xs: Vec<f64> = (0..12).map(|i| i as f64 * 0.1).collect();
    let mut ys: Vec<f64> = xs.iter().map(|x| 1.0 + 2.0 * x - 5.0 * x * x).collect();
    ys[0] = 1e6;
    ys[11] = -1e6;
    let fit = QuadraticFit::fit(&xs, &ys, 2, 8).unwrap().unwrap();
    assert_eq!(fit.point_count(), 8);
    assert!((fit.a2() + 5.0).abs() < 1e-8);
    assert!((fit.a1() - 2.0).abs() < 1e-8);
    assert!((fit.a0() - 1.0).abs() < 1e-8);
    assert!((fit.vertex().unwrap() - 0.2).abs() < 1e-9);
}

#[test]
fn least_squares_fit_smooths_noisy_points() {
    let xs = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let ys = [4.1, 0.9, 0.05, 1.1, 3.9];
    let fit = QuadraticFit::fit(&xs, &ys, 0, 5).unwrap().unwrap();
    assert!((fit.a2() - 1.0).abs() < 0.1);
    assert!(fit.a1().abs() < 0.1);
}

#[test]
fn fit_with_repeated_position_is_unavailable() {
    let xs = [0.3, 0.3, 0.7];
    let ys = [1.0, -1.0, 2.0];
    assert!(QuadraticFit::fit(&xs, &ys, 0, 3).unwrap().is_none());
}

#[test]
fn fit_rejects_tiny_window_and_overrun() {
    let xs = [0.0, 1.0, 2.0];
    assert!(QuadraticFit::fit(&xs, &xs, 0, 2).is_err());
    assert!(QuadraticFit::fit(&xs, &xs, 1, 3).is_err());
    assert!(QuadraticFit::fit(&xs, &xs, usize::MAX, 3).is_err());
}

#[test]
fn pivot_window_keeps_constant_width_near_edges() {
    let region = IndexRange::from_start_end(2, 12).unwrap();
    for pivot in region.indices() {
        let window = select_window_around_pivot(region, pivot, 3).unwrap();
        assert_eq!(window.length(), 7);
        assert!(window.start_inclusive() >= 2);
        assert!(window.end_inclusive() <= 12);
        assert!(window.contains(pivot));
    }
}
