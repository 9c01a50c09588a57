//! Adaptive selection of the number of Chebyshev coefficients.

use tracing::{debug, warn};

use crate::chop::standard_chop;
use crate::convert::values_to_coefficients;
use crate::error::ChebError;
use crate::points::chebyshev_points;
use crate::scalar::Scalar;

/// Smallest grid tried is `2^MIN_POW2 + 1` points.
const MIN_POW2: u32 = 4;

/// Outcome of [`adaptive_degree`].
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveFit<T> {
    /// Chopped coefficients, or the full set at the finest grid when
    /// `converged` is false.
    pub coefficients: Vec<T>,
    /// Whether the chop discarded anything on some grid.
    pub converged: bool,
    /// Size of the last grid sampled.
    pub points_used: usize,
}

/// Sample `sample_fn` on grids of `2^k + 1` Chebyshev points for
/// `k = 4, ..., max_pow2` until [`standard_chop`] at tolerance `tol`
/// discards at least one coefficient.
///
/// `sample_fn` receives the points and must return one value per point.
pub fn adaptive_degree<T, F>(
    mut sample_fn: F,
    max_pow2: u32,
    tol: f64,
) -> Result<AdaptiveFit<T>, ChebError>
where
    T: Scalar,
    F: FnMut(&[f64]) -> Vec<T>,
{
    if max_pow2 < MIN_POW2 {
        return Err(ChebError::InvalidArgument("max_pow2 must be at least 4"));
    }
    if max_pow2 > 30 {
        return Err(ChebError::InvalidArgument("max_pow2 must be at most 30"));
    }

    let mut points_used = 0;
    let mut coeffs = Vec::new();
    for k in MIN_POW2..=max_pow2 {
        let n = (1usize << k) + 1;
        let points = chebyshev_points(n);
        let values = sample_fn(&points);
        if values.len() != n {
            return Err(ChebError::LengthMismatch {
                what: "sampled values",
                expected: n,
                found: values.len(),
            });
        }
        coeffs = values_to_coefficients(&values);
        points_used = n;

        let cutoff = standard_chop(&coeffs, tol);
        if cutoff < coeffs.len() {
            coeffs.truncate(cutoff);
            debug!(points = n, length = cutoff, "adaptive construction converged");
            return Ok(AdaptiveFit {
                coefficients: coeffs,
                converged: true,
                points_used,
            });
        }
    }

    warn!(
        points = points_used,
        "adaptive construction did not converge; keeping all coefficients"
    );
    Ok(AdaptiveFit {
        coefficients: coeffs,
        converged: false,
        points_used,
    })
}
