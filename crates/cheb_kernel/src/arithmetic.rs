//! Coefficient-space arithmetic on first-kind Chebyshev series.

use num_complex::Complex64;

use crate::error::ChebError;
use crate::scalar::{Kind, Scalar, classify};
use crate::transform::{fft, ifft};

/// Coefficients of the product of two series of equal length `n`,
/// truncated to the first `n` terms.
///
/// The product is formed by circular convolution of the doubled cosine
/// series, so it is exact up to degree `n - 1` and drops everything above.
pub fn multiply_coefficients<T: Scalar>(a: &[T], b: &[T]) -> Result<Vec<T>, ChebError> {
    if a.len() != b.len() {
        return Err(ChebError::LengthMismatch {
            what: "multiplication operand",
            expected: a.len(),
            found: b.len(),
        });
    }
    let n = a.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let fa = fft(&doubled_cosine_series(a));
    let fb = fft(&doubled_cosine_series(b));
    let spectrum: Vec<Complex64> = fa.iter().zip(fb.iter()).map(|(x, y)| x * y).collect();
    let ak = ifft(&spectrum);

    // Fold the two-sided result: out[0] = ak[0], out[i] = ak[i] + ak[m - i].
    let m = ak.len();
    let mut out: Vec<Complex64> = Vec::with_capacity(n);
    out.push(ak[0] * 0.25);
    for i in 1..n {
        out.push((ak[i] + ak[m - i]) * 0.25);
    }

    let inputs_real = classify(&to_complex(a)) == Kind::Real && classify(&to_complex(b)) == Kind::Real;
    Ok(out
        .into_iter()
        .map(|z| {
            if inputs_real {
                T::from_complex(Complex64::new(z.re, 0.0))
            } else {
                T::from_complex(z)
            }
        })
        .collect())
}

/// Coefficients of the derivative on `[-1, 1]`, one shorter than the input.
///
/// Constants (and empty input) differentiate to `[0]`.
pub fn differentiate_coefficients<T: Scalar>(coeffs: &[T]) -> Vec<T> {
    let n = coeffs.len();
    if n <= 1 {
        return vec![T::zero()];
    }
    // d_{k-1} = d_{k+1} + 2k c_k, from the top down, then halve d_0.
    let mut d = vec![T::zero(); n + 1];
    for k in (1..n).rev() {
        d[k - 1] = d[k + 1] + coeffs[k] * (2.0 * k as f64);
    }
    d[0] = d[0] * 0.5;
    d.truncate(n - 1);
    d
}

/// `[2 c_0, c_1, ..., c_{n-1}, c_{n-1}, ..., c_1]`
fn doubled_cosine_series<T: Scalar>(c: &[T]) -> Vec<Complex64> {
    let mut out = Vec::with_capacity(2 * c.len() - 1);
    out.push(c[0].to_complex() * 2.0);
    out.extend(c[1..].iter().map(|v| v.to_complex()));
    out.extend(c[1..].iter().rev().map(|v| v.to_complex()));
    out
}

fn to_complex<T: Scalar>(c: &[T]) -> Vec<Complex64> {
    c.iter().map(|v| v.to_complex()).collect()
}
