//! Conversion between samples at second-kind Chebyshev points and
//! first-kind Chebyshev coefficients.
//!
//! Both directions mirror the length-`n` sequence into an even signal of
//! length `2n - 2` and run one DFT, the discrete cosine transform in
//! disguise.

use num_complex::Complex64;

use crate::scalar::{Kind, Scalar, classify};
use crate::transform::{fft, ifft};

/// Coefficients of the interpolant through `values`, sampled at
/// [`chebyshev_points`](crate::chebyshev_points)`(n)` in that order.
///
/// Sequences of length 0 or 1 come back unchanged.
pub fn values_to_coefficients<T: Scalar>(values: &[T]) -> Vec<T> {
    let n = values.len();
    if n <= 1 {
        return values.to_vec();
    }
    let vals: Vec<Complex64> = values.iter().map(|v| v.to_complex()).collect();

    // [v_{n-1}, ..., v_0, v_1, ..., v_{n-2}]
    let mut signal: Vec<Complex64> = Vec::with_capacity(2 * n - 2);
    signal.extend(vals.iter().rev());
    signal.extend_from_slice(&vals[1..n - 1]);

    let mut coeffs = transform_by_kind(&signal, classify(&vals), ifft);
    coeffs.truncate(n);
    for c in &mut coeffs[1..n - 1] {
        *c *= 2.0;
    }
    coeffs.into_iter().map(T::from_complex).collect()
}

/// Values at [`chebyshev_points`](crate::chebyshev_points)`(n)` of the
/// series with first-kind `coefficients`. Inverse of
/// [`values_to_coefficients`].
pub fn coefficients_to_values<T: Scalar>(coefficients: &[T]) -> Vec<T> {
    let n = coefficients.len();
    if n <= 1 {
        return coefficients.to_vec();
    }
    let mut coeffs: Vec<Complex64> = coefficients.iter().map(|c| c.to_complex()).collect();
    let kind = classify(&coeffs);
    for c in &mut coeffs[1..n - 1] {
        *c *= 0.5;
    }

    // [c_0, ..., c_{n-1}, c_{n-2}, ..., c_1]
    let mut signal: Vec<Complex64> = Vec::with_capacity(2 * n - 2);
    signal.extend_from_slice(&coeffs);
    signal.extend(coeffs[1..n - 1].iter().rev());

    let vals = transform_by_kind(&signal, kind, fft);
    vals[..n].iter().rev().map(|&z| T::from_complex(z)).collect()
}

/// Run `transform` on the component that carries information so that purely
/// real or purely imaginary input does not pick up rounding noise in the
/// other component.
fn transform_by_kind<F>(signal: &[Complex64], kind: Kind, transform: F) -> Vec<Complex64>
where
    F: Fn(&[Complex64]) -> Vec<Complex64>,
{
    match kind {
        Kind::Real => transform(signal)
            .into_iter()
            .map(|z| Complex64::new(z.re, 0.0))
            .collect(),
        Kind::Imaginary => {
            let imag: Vec<Complex64> = signal.iter().map(|z| Complex64::new(z.im, 0.0)).collect();
            transform(&imag)
                .into_iter()
                .map(|z| Complex64::new(0.0, z.re))
                .collect()
        }
        Kind::Complex => transform(signal),
    }
}
