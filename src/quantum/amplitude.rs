use num_complex::Complex64;

/// A complex weight on one candidate identity.
pub type Amplitude = Complex64;

pub const ZERO: Amplitude = Complex64::new(0.0, 0.0);
pub const ONE: Amplitude = Complex64::new(1.0, 0.0);

#[inline]
pub const fn amp(re: f64, im: f64) -> Amplitude {
    Complex64::new(re, im)
}

/// `(a,b)*(c,d) = (ac-bd, bc+ad)`.
#[inline]
pub fn multiply(lhs: Amplitude, rhs: Amplitude) -> Amplitude {
    amp(
        lhs.re * rhs.re - lhs.im * rhs.im,
        lhs.im * rhs.re + lhs.re * rhs.im,
    )
}

#[inline]
pub fn modulus(a: Amplitude) -> f64 {
    (a.re * a.re + a.im * a.im).sqrt()
}

/// True unless both components are exactly zero.
#[inline]
pub fn is_nonzero(a: Amplitude) -> bool {
    a.re != 0.0 || a.im != 0.0
}

/// Kronecker product of two amplitude vectors: every `a` of `lhs` times every `b` of `rhs`,
/// `lhs`-major.
pub fn kronecker(lhs: &[Amplitude], rhs: &[Amplitude]) -> Vec<Amplitude> {
    let mut out = Vec::with_capacity(lhs.len() * rhs.len());
    for &a in lhs {
        for &b in rhs {
            out.push(multiply(a, b));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiply_matches_native_complex_product() {
        let a = amp(3.4, 1.8);
        let b = amp(0.0, 0.7777);
        let ours = multiply(a, b);
        let native = a * b;
        assert!((ours.re - native.re).abs() < 1e-12);
        assert!((ours.im - native.im).abs() < 1e-12);
    }

    #[test]
    fn zero_check_only_rejects_origin() {
        assert!(!is_nonzero(ZERO));
        assert!(is_nonzero(amp(0.0, 1.0)));
        assert!(is_nonzero(amp(-0.1, 0.0)));
    }

    #[test]
    fn kronecker_with_empty_side_is_empty() {
        assert!(kronecker(&[], &[ONE, ONE]).is_empty());
    }
}
