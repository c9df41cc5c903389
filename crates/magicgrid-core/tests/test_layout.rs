mod common;

use approx::assert_relative_eq;

use magicgrid_core::error::MagicGridError;
use magicgrid_core::layout::{fit, fit_within, DisplaySize, ViewportBounds};

use common::rel_diff;

#[test]
fn test_fit_both_axes_over_binds_width() {
    let size = fit(4000.0, 2000.0, 1000.0, 1000.0);
    assert_eq!(size, DisplaySize::new(1000.0, 500.0));
}

#[test]
fn test_fit_both_axes_over_binds_height() {
    let size = fit(3000.0, 6000.0, 1000.0, 1000.0);
    assert_eq!(size, DisplaySize::new(500.0, 1000.0));
}

#[test]
fn test_fit_only_height_over() {
    let size = fit(500.0, 2000.0, 1000.0, 1000.0);
    assert_eq!(size, DisplaySize::new(250.0, 1000.0));
}

#[test]
fn test_fit_only_width_over() {
    let size = fit(1600.0, 400.0, 800.0, 1000.0);
    assert_eq!(size, DisplaySize::new(800.0, 200.0));
}

#[test]
fn test_fit_small_image_unchanged() {
    let size = fit(320.0, 240.0, 1000.0, 1000.0);
    assert_eq!(size, DisplaySize::new(320.0, 240.0));
}

#[test]
fn test_fit_exact_bounds_unchanged() {
    let size = fit(1000.0, 1000.0, 1000.0, 1000.0);
    assert_eq!(size, DisplaySize::new(1000.0, 1000.0));
}

#[test]
fn test_fit_equal_overflow_binds_height() {
    let size = fit(2000.0, 1000.0, 1000.0, 500.0);
    assert_relative_eq!(size.width, 1000.0, max_relative = 1e-12);
    assert_eq!(size.height, 500.0);
}

#[test]
fn test_fit_is_idempotent() {
    let cases = [
        (4000.0, 2000.0, 1000.0, 1000.0),
        (500.0, 2000.0, 1000.0, 1000.0),
        (1920.0, 1080.0, 1184.0, 1000.0),
        (333.0, 777.0, 100.0, 300.0),
        (12.0, 7.0, 640.0, 480.0),
    ];
    for (w, h, mw, mh) in cases {
        let once = fit(w, h, mw, mh);
        let twice = fit(once.width, once.height, mw, mh);
        assert_eq!(once, twice, "fit({w}, {h}, {mw}, {mh}) not idempotent");
    }
}

#[test]
fn test_fit_single_axis_preserves_ratio() {
    let cases = [
        (1500.0, 300.0, 1000.0, 1000.0),
        (300.0, 1500.0, 1000.0, 1000.0),
        (1001.0, 3.0, 1000.0, 1000.0),
        (7.0, 4321.0, 1000.0, 1000.0),
        (2560.0, 999.0, 1184.0, 1000.0),
    ];
    for (w, h, mw, mh) in cases {
        let size = fit(w, h, mw, mh);
        assert!(
            rel_diff(size.aspect_ratio(), w / h) < 1e-6,
            "ratio drifted for {w}x{h}: {size:?}"
        );
        assert!(size.width == mw || size.height == mh, "no axis bound for {w}x{h}");
        assert!(size.width <= mw && size.height <= mh);
    }
}

#[test]
fn test_fit_never_exceeds_bounds() {
    for w in [1.0, 99.0, 1000.0, 1001.0, 4096.0, 12345.0] {
        for h in [1.0, 77.0, 999.0, 1000.0, 3000.0, 54321.0] {
            let size = fit(w, h, 1000.0, 1000.0);
            assert!(size.width <= 1000.0, "{w}x{h} -> {size:?}");
            assert!(size.height <= 1000.0, "{w}x{h} -> {size:?}");
        }
    }
}

#[test]
fn test_bounds_fit_matches_free_function() {
    let bounds = ViewportBounds::new(1000.0, 1000.0);
    assert_eq!(bounds.fit(4000.0, 2000.0), fit(4000.0, 2000.0, 1000.0, 1000.0));
}

#[test]
fn test_default_bounds() {
    let bounds = ViewportBounds::default();
    assert_eq!(bounds.max_width, 1000.0);
    assert_eq!(bounds.max_height, 1000.0);
}

#[test]
fn test_bounds_validate_accepts_positive() {
    assert!(ViewportBounds::new(1200.0, 1000.0).validate().is_ok());
    assert!(ViewportBounds::new(0.5, 0.5).validate().is_ok());
}

#[test]
fn test_bounds_validate_rejects_degenerate() {
    for (w, h) in [
        (0.0, 1000.0),
        (1000.0, 0.0),
        (-5.0, 1000.0),
        (1000.0, -1.0),
        (f64::NAN, 1000.0),
        (1000.0, f64::INFINITY),
    ] {
        let err = ViewportBounds::new(w, h).validate().unwrap_err();
        assert!(matches!(err, MagicGridError::InvalidBounds(_)), "{w}x{h}");
    }
}

#[test]
fn test_try_from_container_subtracts_gap() {
    let bounds = ViewportBounds::try_from_container(1216.0, 16.0, 1000.0).unwrap();
    assert_eq!(bounds, ViewportBounds::new(1200.0, 1000.0));
}

#[test]
fn test_try_from_container_rejects_width_within_gap() {
    for container in [16.0, 10.0, 0.0, -100.0, f64::NAN] {
        let err = ViewportBounds::try_from_container(container, 16.0, 1000.0).unwrap_err();
        assert!(matches!(err, MagicGridError::InvalidBounds(_)), "{container}");
    }
}

#[test]
fn test_try_from_container_rejects_bad_height() {
    let err = ViewportBounds::try_from_container(1216.0, 16.0, 0.0).unwrap_err();
    assert!(matches!(err, MagicGridError::InvalidBounds(_)));
}

#[test]
fn test_fit_within_shrinks_wide_image() {
    let size = fit_within(2000.0, 1000.0, 500.0, 500.0);
    assert_eq!(size, DisplaySize::new(500.0, 250.0));
}

#[test]
fn test_fit_within_rechecks_height() {
    let size = fit_within(1000.0, 2000.0, 800.0, 400.0);
    assert_eq!(size, DisplaySize::new(200.0, 400.0));
}

#[test]
fn test_fit_within_never_upscales() {
    let size = fit_within(120.0, 80.0, 1000.0, 1000.0);
    assert_eq!(size, DisplaySize::new(120.0, 80.0));
}

#[test]
fn test_fit_within_fitted_size_is_unchanged() {
    let fitted = fit(4000.0, 2000.0, 1000.0, 1000.0);
    let (w, h) = fitted.pixel_dims();
    let placed = fit_within(fitted.width, fitted.height, w as f64, h as f64);
    assert_eq!(placed, fitted);
}
