//! Truncation of Chebyshev series to a relative tolerance.
//!
//! J. Aurentz and L. N. Trefethen, "Chopping a Chebyshev series",
//! ACM Trans. Math. Softw. 43 (2017), arXiv:1512.01803.

use crate::scalar::Scalar;

/// Series shorter than this are never chopped.
const MIN_CHOP_LEN: usize = 17;

/// Number of leading coefficients of `coeffs` worth keeping at relative
/// tolerance `tol`.
///
/// Returns `n` unchanged when no plateau is found (or `n < 17`), `1` for an
/// identically zero series, and otherwise a cutoff no larger than `n - 1`.
pub fn standard_chop<T: Scalar>(coeffs: &[T], tol: f64) -> usize {
    let n = coeffs.len();
    if n < MIN_CHOP_LEN {
        return n;
    }

    // Step 1: monotone envelope of |c_k| from the tail backward.
    let mut envelope: Vec<f64> = coeffs.iter().map(|c| c.magnitude()).collect();
    for j in (0..n - 1).rev() {
        envelope[j] = envelope[j].max(envelope[j + 1]);
    }
    if envelope[0] == 0.0 {
        return 1;
    }
    let peak = envelope[0];
    for e in &mut envelope {
        *e /= peak;
    }

    // Step 2: first j whose envelope has flattened out by j2 = round(1.25 j + 5).
    let log_tol = tol.ln();
    let mut found = None;
    for j in 1..n {
        let j2 = (1.25 * j as f64 + 5.0).round() as usize;
        if j2 > n - 1 {
            return n;
        }
        let e1 = envelope[j];
        let e2 = envelope[j2];
        let r = 3.0 * (1.0 - e1.ln() / log_tol);
        if e1 == 0.0 || e2 / e1 > r {
            found = Some((j, j2));
            break;
        }
    }
    let Some((plateau_point, mut j2)) = found else {
        return n;
    };

    // Step 3: cutoff at the corner of the log-envelope.
    let cutoff = if envelope[plateau_point] == 0.0 {
        plateau_point
    } else {
        let floor = tol.powf(7.0 / 6.0);
        let j3 = envelope.iter().filter(|&&e| e >= floor).count();
        if j3 < j2 {
            j2 = j3 + 1;
            envelope[j2] = floor;
        }
        let ramp = (-1.0 / 3.0) * tol.log10();
        let step = if j2 > 1 { ramp / (j2 - 1) as f64 } else { 0.0 };
        envelope[..j2]
            .iter()
            .enumerate()
            .map(|(k, e)| e.log10() + step * k as f64)
            .enumerate()
            .fold((0, f64::INFINITY), |(best_k, best), (k, cc)| {
                if cc < best { (k, cc) } else { (best_k, best) }
            })
            .0
    };
    cutoff.min(n - 1)
}
