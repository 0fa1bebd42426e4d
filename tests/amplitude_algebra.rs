use approx::assert_abs_diff_eq;
use quantum_chess::quantum::amplitude::{amp, kronecker, modulus, multiply, Amplitude};

fn assert_amp(actual: Amplitude, re: f64, im: f64) {
    assert_abs_diff_eq!(actual.re, re, epsilon = 0.01);
    assert_abs_diff_eq!(actual.im, im, epsilon = 0.01);
}

fn assert_vector(actual: &[Amplitude], expected: &[(f64, f64)]) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, &(re, im))) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a.re - re).abs() < 0.01 && (a.im - im).abs() < 0.01,
            "index {i}: expected ({re}, {im}), got {a}"
        );
    }
}

#[test]
fn complex_multiplication() {
    assert_amp(multiply(amp(1.0, 1.0), amp(0.5, 0.5)), 0.0, 1.0);
    assert_amp(multiply(amp(1.0, 1.0), amp(3.4, 1.8)), 1.6, 5.2);
    assert_amp(multiply(amp(3.4, 1.8), amp(0.0, 0.7777)), -1.39, 2.64);
    assert_amp(multiply(amp(0.0, 0.7777), amp(0.0, 1.0)), -0.7777, 0.0);
}

#[test]
fn modulus_of_sample_values() {
    assert_abs_diff_eq!(modulus(amp(1.0, 1.0)), 2f64.sqrt(), epsilon = 0.01);
    assert_abs_diff_eq!(modulus(amp(3.4, 1.8)), 3.84, epsilon = 0.01);
    assert_abs_diff_eq!(modulus(amp(0.0, 1.0)), 1.0, epsilon = 0.01);
}

#[test]
fn kronecker_is_lhs_major() {
    let s1 = [amp(1.0, 1.0), amp(0.5, 0.5)];
    let s2 = [amp(3.4, 1.8), amp(0.0, 0.7777)];
    let s3 = [amp(0.0, 1.0), amp(1.0, 1.0)];

    let k = kronecker(&s1, &s2);
    assert_vector(
        &k,
        &[(1.6, 5.2), (-0.7777, 0.7777), (0.8, 2.6), (-0.38885, 0.38885)],
    );

    let k3 = kronecker(&k, &s3);
    assert_vector(
        &k3,
        &[
            (-5.2, 1.6),
            (-3.6, 6.8),
            (-0.7777, -0.7777),
            (-1.5554, 0.0),
            (-2.6, 0.8),
            (-1.8, 3.4),
            (-0.38885, -0.38885),
            (-0.7777, 0.0),
        ],
    );
}
