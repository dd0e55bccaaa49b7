use super::*;

#[test]
fn pseudo_random_is_deterministic_and_bounded() {
    for k in -200..200 {
        let x = f64::from(k) * 0.37;
        let v = pseudo_random(x);
        assert_eq!(v.to_bits(), pseudo_random(x).to_bits());
        assert!(v > -1.0 && v < 1.0, "x={x} v={v}");
    }
}

#[test]
fn pseudo_random_keeps_sign_of_dividend() {
    // sin(-12.9898) is negative, so the raw product is negative and so is the remainder.
    let raw = (-12.9898f64).sin() * 43758.5453123;
    assert!(raw < 0.0);
    let v = pseudo_random(-1.0);
    assert!(v <= 0.0);
    assert_eq!(v, raw % 1.0);
    assert_eq!(pseudo_random(0.0), 0.0);
}

#[test]
fn smoothstep_endpoints_and_midpoint() {
    assert_eq!(smoothstep(0.0), 0.0);
    assert_eq!(smoothstep(1.0), 1.0);
    assert_eq!(smoothstep(0.5), 0.5);
}

#[test]
fn noise_matches_lattice_values_at_integers() {
    for (i, j) in [(0.0, 0.0), (3.0, -2.0), (-5.0, 7.0)] {
        let expected = pseudo_random(i + j * LATTICE_ROW_STRIDE);
        assert_eq!(noise_2d(i, j), expected);
    }
}

#[test]
fn noise_is_continuous_across_lattice_lines() {
    let eps = 1e-9;
    for n in -4..4 {
        let n = f64::from(n);
        for y in [0.25, 1.5, -3.75] {
            let left = noise_2d(n - eps, y);
            let right = noise_2d(n + eps, y);
            assert!((left - right).abs() < 1e-6, "x={n} y={y}");

            let below = noise_2d(y, n - eps);
            let above = noise_2d(y, n + eps);
            assert!((below - above).abs() < 1e-6, "x={y} y={n}");
        }
    }
}

#[test]
fn noise_stays_within_corner_range() {
    for k in 0..500 {
        let x = f64::from(k) * 0.113 - 20.0;
        let y = f64::from(k) * 0.071 + 3.0;
        let v = noise_2d(x, y);
        assert!(v > -1.0 && v < 1.0);
    }
}
